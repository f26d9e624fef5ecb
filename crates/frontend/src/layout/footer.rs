use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="app-footer">
            <p>{format!("© {} Sistema de Inventario", year)}</p>
        </footer>
    }
}
