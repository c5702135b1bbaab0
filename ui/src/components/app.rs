use dioxus::prelude::*;

use super::admin_clients::AdminClientsView;
use super::admin_employees::AdminEmployeesView;
use super::admin_home::AdminHomeView;
use super::admin_products::AdminProductsView;
use super::cart_state::{use_cart_state, CartState};
use super::catalog_view::CatalogView;
use super::login_view::LoginView;
use super::notices::{NoticeHost, Notices};
use super::register_view::RegisterView;
use super::session::{use_session, Session};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(PublicLayout)]
    #[route("/?:search")]
    Catalog { search: String },
    #[end_layout]
    #[layout(AdminLayout)]
    #[route("/admin")]
    AdminHome {},
    #[route("/admin/products")]
    AdminProducts {},
    #[route("/admin/employees")]
    AdminEmployees {},
    #[route("/admin/clients")]
    AdminClients {},
    #[end_layout]
    #[layout(AuthLayout)]
    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    Register {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(Session::load()));
    use_context_provider(|| Signal::new(CartState::new()));
    use_context_provider(|| Signal::new(Notices::new()));

    rsx! { Router::<Route> {} }
}

#[component]
fn PublicLayout() -> Element {
    let mut session = use_session();
    let mut cart_state = use_cart_state();
    let nav = use_navigator();
    let mut query = use_signal(String::new);

    let cart_count = cart_state.read().cart.len();
    let authenticated = session.read().is_authenticated();

    let submit_search = move || {
        let search = query.read().trim().to_string();
        nav.push(Route::Catalog { search });
    };

    rsx! {
        div { class: "public-shell",
            header { class: "public-header",
                button {
                    class: "brand",
                    onclick: move |_| {
                        nav.push(Route::Catalog { search: String::new() });
                    },
                    "Manos que Alimentan"
                }
                div { class: "search-box",
                    input {
                        r#type: "search",
                        placeholder: "Buscar productos...",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                submit_search();
                            }
                        },
                    }
                    button {
                        class: "search-btn",
                        onclick: move |_| submit_search(),
                        "Buscar"
                    }
                }
                div { class: "header-actions",
                    button {
                        class: "cart-btn",
                        aria_label: "Abrir carrito",
                        onclick: move |_| cart_state.write().open = true,
                        "Carrito"
                        span { class: "cart-count", "{cart_count}" }
                    }
                    if authenticated {
                        button {
                            class: "logout-btn",
                            onclick: move |_| {
                                session.write().log_out();
                                nav.push(Route::Catalog { search: String::new() });
                            },
                            "Cerrar sesión"
                        }
                    } else {
                        button {
                            class: "login-btn",
                            aria_label: "Mi cuenta",
                            onclick: move |_| {
                                nav.push(Route::Login {});
                            },
                            "Iniciar sesión"
                        }
                    }
                }
            }
            NoticeHost {}
            main { class: "public-main",
                Outlet::<Route> {}
            }
            footer { class: "public-footer",
                p { "Manos que Alimentan - Plataforma para la donación y distribución de alimentos." }
            }
        }
    }
}

#[component]
fn AdminLayout() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    // Staff only. Clients and anonymous visitors land on the login page.
    if !session.read().is_staff() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let state = session.read();
    let role = state.role();
    let display_name = state
        .token()
        .and_then(|t| t.claims().name.clone())
        .unwrap_or_else(|| "Desconocido".to_string());
    let email = state
        .token()
        .and_then(|t| t.claims().email.clone())
        .unwrap_or_else(|| "email@ejemplo.com".to_string());
    let role_label = role.label().to_string();
    let can_products = role.can_manage_products();
    let can_clients = role.can_manage_clients();
    let can_employees = role.can_manage_employees();
    drop(state);

    rsx! {
        div { class: "admin-shell",
            header { class: "admin-header",
                button {
                    class: "brand",
                    onclick: move |_| {
                        nav.push(Route::AdminHome {});
                    },
                    "Manos Que Alimentan"
                }
                nav { class: "admin-nav",
                    button {
                        onclick: move |_| {
                            nav.push(Route::AdminHome {});
                        },
                        "Inicio"
                    }
                    if can_products {
                        button {
                            onclick: move |_| {
                                nav.push(Route::AdminProducts {});
                            },
                            "Inventario"
                        }
                    }
                    if can_clients {
                        button {
                            onclick: move |_| {
                                nav.push(Route::AdminClients {});
                            },
                            "Clientes"
                        }
                    }
                    if can_employees {
                        button {
                            onclick: move |_| {
                                nav.push(Route::AdminEmployees {});
                            },
                            "Empleados"
                        }
                    }
                }
                div { class: "admin-profile",
                    span { class: "profile-name", "{display_name}" }
                    span { class: "profile-role", "{role_label}" }
                    span { class: "profile-email", "{email}" }
                    button {
                        class: "logout-btn",
                        onclick: move |_| {
                            session.write().log_out();
                            nav.push(Route::Catalog { search: String::new() });
                        },
                        "Cerrar sesión"
                    }
                }
            }
            NoticeHost {}
            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn AuthLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "auth-shell",
            header { class: "auth-header",
                button {
                    class: "brand",
                    onclick: move |_| {
                        nav.push(Route::Catalog { search: String::new() });
                    },
                    "Manos que Alimentan"
                }
            }
            NoticeHost {}
            main { class: "auth-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: public catalog, filtered by the `search` query.
#[component]
fn Catalog(search: String) -> Element {
    rsx! { CatalogView { search } }
}

/// Route component: dashboard landing page.
#[component]
fn AdminHome() -> Element {
    rsx! { AdminHomeView {} }
}

/// Route component: inventory management.
#[component]
fn AdminProducts() -> Element {
    rsx! { AdminProductsView {} }
}

/// Route component: employee management.
#[component]
fn AdminEmployees() -> Element {
    rsx! { AdminEmployeesView {} }
}

/// Route component: client management.
#[component]
fn AdminClients() -> Element {
    rsx! { AdminClientsView {} }
}

/// Route component: login form.
#[component]
fn Login() -> Element {
    rsx! { LoginView {} }
}

/// Route component: client registration form.
#[component]
fn Register() -> Element {
    rsx! { RegisterView {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");

    rsx! {
        section { class: "not-found",
            h2 { "404" }
            p { "La página \"/{path}\" no existe." }
            button {
                class: "btn-primary",
                onclick: move |_| {
                    nav.replace(Route::Catalog { search: String::new() });
                },
                "Volver al inicio"
            }
        }
    }
}
