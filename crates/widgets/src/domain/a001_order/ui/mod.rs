pub mod my_order;
pub mod product_list;
