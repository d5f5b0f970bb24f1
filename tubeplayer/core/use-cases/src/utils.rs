pub mod aliases {
    pub type Outcome<T> = ::std::result::Result<T, crate::models::errors::PlayerError>;
}
