pub mod prelude;
pub mod number_theory{
    pub mod square_root_engine_trait;
    pub mod integer_square_root;
}
