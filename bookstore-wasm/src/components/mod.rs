pub mod header;
pub mod login_form;
pub mod post_item;
pub mod post_list;
