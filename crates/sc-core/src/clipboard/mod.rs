mod origin;

pub use origin::ClipboardChangeOrigin;
