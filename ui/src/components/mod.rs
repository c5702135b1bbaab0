pub mod admin_clients;
pub mod admin_employees;
pub mod admin_home;
pub mod admin_products;
pub mod api_client;
pub mod app;
pub mod cart_modal;
pub mod cart_state;
pub mod catalog_view;
pub mod category_filter;
pub mod forms;
pub mod login_view;
pub mod notices;
pub mod pagination;
pub mod product_card;
pub mod product_modal;
pub mod register_view;
pub mod session;
pub mod user_modal;
