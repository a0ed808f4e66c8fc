pub mod accounts;
pub mod category_manager;
pub mod faq_editor;
pub mod faq_list;
pub mod gallery;
pub mod kpi_pills;
pub mod menu_card;
pub mod menu_editor;
pub mod menu_table;
pub mod modal;
pub mod narration;
pub mod pager;
pub mod toast;
