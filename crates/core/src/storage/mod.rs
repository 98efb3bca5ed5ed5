pub mod target_store;
