pub mod file_writer;
pub mod inventory_file_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use inventory_file_reader::InventoryFileReader;
