use crate::error::BridgeError;
use log::debug;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Size of the read buffer used when streaming a file through the hasher.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Computes the SHA-256 digest of a buffer held entirely in memory.
///
/// # Arguments
///
/// * `raw_content` - The bytes to hash.
///
/// # Returns
///
/// A lowercase hexadecimal string representation of the SHA-256 digest.
pub fn digest_bytes(raw_content: &[u8]) -> String {
    hex::encode(Sha256::digest(raw_content))
}

/// Streams a reader through SHA-256 in chunks of at most `CHUNK_SIZE` bytes.
///
/// Reads interrupted by a signal are retried. Any other read error aborts the computation and the
/// partially updated hasher is dropped, so no digest of a truncated stream is ever produced.
///
/// # Arguments
///
/// * `reader` - The source to consume until end of stream.
///
/// # Returns
///
/// * `Ok(String)` - The lowercase hexadecimal digest.
/// * `Err(BridgeError::Read)` - The first non-retryable read error.
pub fn digest_reader<R: Read>(mut reader: R) -> Result<String, BridgeError> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(BridgeError::Read { path: None, source }),
        };
        hasher.update(&buffer[..n]);
        total += n as u64;
    }

    debug!("Hashed {} bytes", total);
    Ok(hex::encode(hasher.finalize()))
}

/// Opens a file and streams its contents through SHA-256.
///
/// Directories are rejected as an open failure even where the platform lets them be opened. The
/// file handle is dropped on every return path.
///
/// # Arguments
///
/// * `path` - Path of the file to hash.
///
/// # Returns
///
/// * `Ok(String)` - The lowercase hexadecimal digest.
/// * `Err(BridgeError::Open)` - The file could not be opened.
/// * `Err(BridgeError::Read)` - A read failed after the file was opened.
pub fn digest_file(path: &Path) -> Result<String, BridgeError> {
    let file = open_regular(path)?;
    digest_reader(file).map_err(|e| e.with_path(path))
}

/// Opens `path` for reading, refusing directories.
pub(crate) fn open_regular(path: &Path) -> Result<File, BridgeError> {
    let open_err = |source| BridgeError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_err)?;
    let metadata = file.metadata().map_err(open_err)?;
    if metadata.is_dir() {
        return Err(open_err(std::io::Error::new(
            ErrorKind::Other,
            "is a directory",
        )));
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Error, Write};

    const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    /// Reader that yields some bytes, then fails.
    struct FailingReader {
        remaining: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.remaining == 0 {
                return Err(Error::new(ErrorKind::Other, "device unplugged"));
            }
            let n = buf.len().min(self.remaining);
            buf[..n].fill(0xAB);
            self.remaining -= n;
            Ok(n)
        }
    }

    /// Reader that reports an interruption before every real read.
    struct InterruptingReader {
        inner: Cursor<Vec<u8>>,
        interrupt_next: bool,
    }

    impl Read for InterruptingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.interrupt_next {
                self.interrupt_next = false;
                return Err(Error::new(ErrorKind::Interrupted, "signal"));
            }
            self.interrupt_next = true;
            self.inner.read(buf)
        }
    }

    /// Tests the well-known digest of empty input.
    #[test]
    fn test_digest_bytes_empty() {
        assert_eq!(digest_bytes(b""), EMPTY_DIGEST);
    }

    /// Tests a known SHA-256 value ("abc" from FIPS 180-2).
    #[test]
    fn test_digest_bytes_known_value() {
        assert_eq!(
            digest_bytes(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    /// Tests that streaming across several chunks matches the full-buffer digest.
    #[test]
    fn test_digest_reader_matches_bytes_across_chunks() {
        let data: Vec<u8> = (0..(CHUNK_SIZE * 3 + 17)).map(|i| (i % 251) as u8).collect();
        let streamed = digest_reader(Cursor::new(&data)).unwrap();
        assert_eq!(streamed, digest_bytes(&data));
    }

    /// Tests that a mid-stream failure yields a read error instead of a partial digest.
    #[test]
    fn test_digest_reader_mid_stream_failure() {
        let reader = FailingReader {
            remaining: CHUNK_SIZE + 10,
        };
        let err = digest_reader(reader).unwrap_err();
        assert!(matches!(err, BridgeError::Read { .. }));
        assert!(err.to_string().contains("device unplugged"));
    }

    /// Tests that interrupted reads are retried rather than reported.
    #[test]
    fn test_digest_reader_retries_interrupted() {
        let data = b"interrupted but complete".to_vec();
        let reader = InterruptingReader {
            inner: Cursor::new(data.clone()),
            interrupt_next: true,
        };
        assert_eq!(digest_reader(reader).unwrap(), digest_bytes(&data));
    }

    /// Tests hashing a file on disk.
    #[test]
    fn test_digest_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();
        file.flush().unwrap();

        let digest = digest_file(file.path()).unwrap();
        assert_eq!(digest, digest_bytes(b"abc"));
        assert_eq!(digest.len(), 64);
    }

    /// Tests that a missing file is an open error naming the path.
    #[test]
    fn test_digest_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.bin");
        let err = digest_file(&missing).unwrap_err();
        assert!(matches!(err, BridgeError::Open { .. }));
        assert!(err.to_string().contains("nope.bin"));
    }

    /// Tests that a directory is rejected as an open error.
    #[test]
    fn test_digest_file_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = digest_file(dir.path()).unwrap_err();
        assert!(matches!(err, BridgeError::Open { .. }));
    }
}
