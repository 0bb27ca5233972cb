use std::io;
use std::sync::Arc;

use async_trait::async_trait;

/// A raw uploaded file, as handed over by the UI layer.
///
/// The pipeline only needs a name, a declared size, and a way to fetch the
/// bytes. How the handle was obtained (drag-and-drop, file picker, disk)
/// does not matter.
#[async_trait]
pub trait IRawFile: Send + Sync {
    /// Original filename.
    fn name(&self) -> &str;

    /// Declared size in bytes.
    fn size_bytes(&self) -> u64;

    /// Read the full content. An `Err` means storage could not deliver the
    /// bytes at all.
    async fn read_bytes(&self) -> io::Result<Vec<u8>>;
}

#[async_trait]
impl<T: IRawFile + ?Sized> IRawFile for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn size_bytes(&self) -> u64 {
        (**self).size_bytes()
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        (**self).read_bytes().await
    }
}

#[async_trait]
impl<T: IRawFile + ?Sized> IRawFile for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn size_bytes(&self) -> u64 {
        (**self).size_bytes()
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        (**self).read_bytes().await
    }
}
