use leptos::prelude::*;

use super::Section;

#[component]
pub fn Header(active: ReadSignal<Section>, set_active: WriteSignal<Section>) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>"Sistema de Inventario"</h1>
            <nav class="main-nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <a
                                href="#"
                                class="nav-link"
                                class:active=move || active.get() == section
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    set_active.set(section);
                                }
                            >
                                {section.title()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
