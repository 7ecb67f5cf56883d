pub mod column_inspector;
