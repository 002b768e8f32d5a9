pub mod form_field;
pub mod pagination_controls;
pub mod period_filter;
pub mod product_multi_select;
pub mod select_filter;
