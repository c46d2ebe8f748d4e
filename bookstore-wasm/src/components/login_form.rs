use leptos::prelude::*;

// Отправка формы пока не подключена: обработчика submit нет.
#[component]
pub fn LoginForm() -> impl IntoView {
    view! {
        <div class="container">
            <form>
                <div class="mb-3">
                    <label class="form-label" for="formBasicEmail">
                        "Email address"
                    </label>
                    <input
                        id="formBasicEmail"
                        class="form-control"
                        type="email"
                        placeholder="Enter email"
                    />
                </div>

                <div class="mb-3">
                    <label class="form-label" for="formBasicPassword">
                        "Password"
                    </label>
                    <input
                        id="formBasicPassword"
                        class="form-control"
                        type="password"
                        placeholder="Password"
                    />
                </div>

                <button class="btn btn-primary" type="submit">
                    "Log in"
                </button>
            </form>
        </div>
    }
}
