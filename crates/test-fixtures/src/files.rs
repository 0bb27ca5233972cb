//! `IRawFile` doubles.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use budgetlock_core::traits::IRawFile;

/// Bytes that are never valid UTF-8, `len` long.
pub fn binary_file(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| if i % 2 == 0 { 0xFF } else { 0xFE })
        .collect()
}

/// A file whose storage refuses to deliver bytes. Counts read attempts.
#[derive(Debug)]
pub struct FailingFile {
    name: String,
    size_bytes: u64,
    attempts: AtomicUsize,
}

impl FailingFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IRawFile for FailingFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ))
    }
}

/// Delivers its text after a fixed delay on the tokio clock.
#[derive(Debug, Clone)]
pub struct DelayedFile {
    name: String,
    text: String,
    delay: Duration,
}

impl DelayedFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            delay,
        }
    }
}

#[async_trait]
impl IRawFile for DelayedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.text.len() as u64
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        tokio::time::sleep(self.delay).await;
        Ok(self.text.clone().into_bytes())
    }
}

/// A read that never completes.
#[derive(Debug, Clone)]
pub struct StalledFile {
    name: String,
}

impl StalledFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl IRawFile for StalledFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        1024
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        std::future::pending().await
    }
}

/// Declares one size and delivers a different number of bytes.
#[derive(Debug, Clone)]
pub struct MisreportedFile {
    name: String,
    declared: u64,
    bytes: Vec<u8>,
}

impl MisreportedFile {
    pub fn new(name: impl Into<String>, declared: u64, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            declared,
            bytes,
        }
    }
}

#[async_trait]
impl IRawFile for MisreportedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.declared
    }

    async fn read_bytes(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}
