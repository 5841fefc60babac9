/// Application layer: use cases, DTOs and factories.
pub mod dto;
pub mod factories;
pub mod use_cases;
