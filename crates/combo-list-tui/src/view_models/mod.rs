pub mod combo_list;
