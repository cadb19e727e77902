use contracts::domain::a001_sale::SaleRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_sale::api;
use crate::system::auth::context::use_session;

/// Sales records loaded for a dashboard page
#[derive(Clone, Copy)]
pub struct SalesSource {
    pub records: ReadSignal<Vec<SaleRecord>>,
    pub loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    reload_seq: RwSignal<u64>,
}

impl SalesSource {
    pub fn reload(&self) {
        self.reload_seq.update(|n| *n += 1);
    }
}

/// Tracks the newest request so older responses can be discarded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGate {
    latest: u64,
}

impl RequestGate {
    /// Start a request and return its id
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Invalidate every request started so far
    pub fn cancel(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, request_id: u64) -> bool {
        self.latest == request_id
    }
}

/// Loads `GET /sales` whenever the session changes or `reload()` is called.
/// Only the newest request may write its result.
pub fn use_sales_source() -> SalesSource {
    let session = use_session();
    let (records, set_records) = signal(Vec::<SaleRecord>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let reload_seq = RwSignal::new(0u64);
    let gate = StoredValue::new(RequestGate::default());

    Effect::new(move |_| {
        reload_seq.track();
        let Some(session) = session.get() else {
            // a fetch still in flight must not repopulate after logout
            gate.update_value(|g| g.cancel());
            set_records.set(Vec::new());
            set_loading.set(false);
            return;
        };

        let mut request_id = 0;
        gate.update_value(|g| request_id = g.begin());
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::fetch_sales(&session).await;
            if !gate.with_value(|g| g.is_current(request_id)) {
                log::debug!("Discarding stale sales response #{}", request_id);
                return;
            }
            match result {
                Ok(sales) => set_records.set(sales),
                Err(e) => {
                    log::error!("Error fetching sales: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    SalesSource {
        records,
        loading,
        error,
        reload_seq,
    }
}
