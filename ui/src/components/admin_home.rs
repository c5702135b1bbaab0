//! Dashboard landing page with role-gated shortcuts into each section.

use dioxus::prelude::*;

use super::app::Route;
use super::session::use_session;

#[component]
pub fn AdminHomeView() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let role = session.read().role();
    let can_products = role.can_manage_products();
    let can_clients = role.can_manage_clients();
    let can_employees = role.can_manage_employees();

    rsx! {
        section { class: "admin-page admin-home",
            div { class: "welcome-card",
                h2 { class: "welcome-title", "Bienvenido a Manos Que Alimentan" }
                p { class: "welcome-text",
                    "Gestione su negocio de manera eficiente con nuestras herramientas avanzadas."
                }
            }
            div { class: "shortcut-grid",
                if can_products {
                    button {
                        class: "shortcut-card",
                        onclick: move |_| {
                            nav.push(Route::AdminProducts {});
                        },
                        h3 { "Inventario" }
                        p { "Alta, edición y baja de productos donables." }
                    }
                }
                if can_clients {
                    button {
                        class: "shortcut-card",
                        onclick: move |_| {
                            nav.push(Route::AdminClients {});
                        },
                        h3 { "Clientes" }
                        p { "Cuentas de clientes registradas en la plataforma." }
                    }
                }
                if can_employees {
                    button {
                        class: "shortcut-card",
                        onclick: move |_| {
                            nav.push(Route::AdminEmployees {});
                        },
                        h3 { "Empleados" }
                        p { "Personal y roles de gestión." }
                    }
                }
            }
        }
    }
}
