use contracts::domain::a001_sale::{SaleForm, SaleRecord};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::today;

/// Parses the quantity field; anything but a positive integer is 0 and
/// fails form validation
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Add/edit dialog for a sale.
///
/// `initial = None` opens an empty form; `Some(record)` prefills it.
#[component]
pub fn SaleFormModal(
    open: RwSignal<bool>,
    #[prop(into)] initial: Signal<Option<SaleRecord>>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<SaleForm>,
) -> impl IntoView {
    let product_name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let date_of_sale = RwSignal::new(String::new());
    let customer_name = RwSignal::new(String::new());
    let customer_email = RwSignal::new(String::new());
    let customer_phone = RwSignal::new(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    // Сброс полей при каждом открытии
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let form = match initial.get() {
            Some(record) => SaleForm::from_record(&record, today()),
            None => SaleForm::blank(today()),
        };
        product_name.set(form.product_name);
        quantity.set(form.quantity.to_string());
        date_of_sale.set(form.date_of_sale);
        customer_name.set(form.customer_name);
        customer_email.set(form.customer_email);
        customer_phone.set(form.customer_phone);
        set_error.set(None);
    });

    let is_edit = move || initial.with(|i| i.is_some());

    let submit = move |_| {
        let form = SaleForm {
            product_name: product_name.get().trim().to_string(),
            quantity: parse_quantity(&quantity.get()),
            date_of_sale: date_of_sale.get().trim().to_string(),
            customer_name: customer_name.get().trim().to_string(),
            customer_email: customer_email.get().trim().to_string(),
            customer_phone: customer_phone.get().trim().to_string(),
        };
        match form.validate() {
            Ok(()) => {
                set_error.set(None);
                on_submit.run(form);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || if is_edit() { "Edit Sale" } else { "Add New Sale" }}</DialogTitle>
                    <DialogContent>
                        {move || error.get().map(|e| view! {
                            <div class="alert alert--error">{e}</div>
                        })}
                        <Flex vertical=true gap=FlexGap::Medium>
                            <div class="form-group">
                                <label>"Product Name"</label>
                                <Input value=product_name placeholder="e.g. Paracetamol 500mg" />
                            </div>
                            <div class="form-group">
                                <label>"Quantity"</label>
                                <Input value=quantity input_type=InputType::Number />
                            </div>
                            <div class="form-group">
                                <label>"Date of Sale"</label>
                                <input
                                    type="date"
                                    class="form-input"
                                    prop:value=move || date_of_sale.get()
                                    on:input=move |ev| date_of_sale.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-group">
                                <label>"Customer Name"</label>
                                <Input value=customer_name />
                            </div>
                            <div class="form-group">
                                <label>"Customer Email"</label>
                                <Input value=customer_email input_type=InputType::Email placeholder="optional" />
                            </div>
                            <div class="form-group">
                                <label>"Customer Phone"</label>
                                <Input value=customer_phone input_type=InputType::Tel placeholder="optional" />
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=saving
                        >
                            {move || match (saving.get(), is_edit()) {
                                (true, _) => "Saving...",
                                (false, true) => "Update Sale",
                                (false, false) => "Create Sale",
                            }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity(" 3 "), 3);
        assert_eq!(parse_quantity("0"), 0);
        assert_eq!(parse_quantity("-2"), 0);
        assert_eq!(parse_quantity("1.5"), 0);
        assert_eq!(parse_quantity(""), 0);
    }
}
