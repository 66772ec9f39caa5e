

/// Shape of the serialized views
pub mod view_tests;

/// Pool settings and connecting through the configured path
pub mod db_tests;
