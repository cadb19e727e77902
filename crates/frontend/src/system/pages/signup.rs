use contracts::system::auth::{SignupRequest, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_global_context;
use crate::system::auth::api;

#[component]
pub fn SignupPage(on_login: Callback<()>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(String::new());
    let (mobile, set_mobile) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let ctx = use_global_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
            role: role.get(),
            mobile: mobile.get().trim().to_string(),
        };

        if let Err(e) = request.validate() {
            set_error_message.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::signup(&request).await {
                Ok(_) => {
                    log::info!("Registered {}", request.email);
                    ctx.notify_success("Signup successful! Please log in.");
                    on_login.run(());
                }
                Err(e) => {
                    log::error!("Signup failed: {}", e);
                    ctx.notify_error(e.clone());
                    set_error_message.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Pharma Sales"</h1>
                <h2>"Create account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Enter your name"
                            value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="signup-email">"Email"</label>
                        <input
                            type="email"
                            id="signup-email"
                            placeholder="Enter your email"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="signup-password">"Password"</label>
                        <input
                            type="password"
                            id="signup-password"
                            placeholder="Enter your password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="role">"Role"</label>
                        <select
                            id="role"
                            on:change=move |ev| set_role.set(event_target_value(&ev))
                            prop:value=move || role.get()
                            disabled=move || is_loading.get()
                        >
                            <option value="">"Select Role"</option>
                            <option value={UserRole::Sales.as_str()}>{UserRole::Sales.label()}</option>
                            <option value={UserRole::Manager.as_str()}>{UserRole::Manager.label()}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="mobile">"Mobile"</label>
                        <input
                            type="text"
                            id="mobile"
                            placeholder="Enter your mobile number"
                            value=move || mobile.get()
                            on:input=move |ev| set_mobile.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing up..." } else { "Sign up" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Already have an account? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_login.run(());
                        }>"Log in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
