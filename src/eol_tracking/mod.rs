/// Core EOL tracking logic: domain model and pure resolution services.
pub mod domain;
pub mod services;
