//! AES block-cipher collaborator interface.
//!
//! This engine calls out to an AES implementation for record encryption;
//! it does not provide one. [`AesBlockEngine`] is the seam, and
//! [`NullAesEngine`] is a stub implementor that always reports itself
//! unsupported, for wiring tests that need a concrete type without a real
//! cipher behind it.

use std::sync::OnceLock;

use crate::error::Result;

/// A 128-bit AES block.
pub type Block = [u8; 16];

/// The seam this engine calls through for record-layer AES operations.
///
/// Implementors own key scheduling; every method here takes the raw key
/// bytes directly rather than a pre-expanded schedule.
pub trait AesBlockEngine {
    /// Whether this implementor can actually perform AES on the running
    /// CPU. Callers must check this before relying on any other method.
    fn supported(&self) -> bool;

    /// Encrypts a single block under ECB.
    fn encrypt_ecb(&self, key: &[u8], block: &Block) -> Result<Block>;

    /// Decrypts a single block under ECB.
    fn decrypt_ecb(&self, key: &[u8], block: &Block) -> Result<Block>;

    /// Encrypts `input` under CBC, chaining from `iv`. `input`'s length
    /// must be a multiple of 16; `output` must be the same length.
    fn encrypt_cbc(&self, key: &[u8], iv: &mut Block, input: &[u8], output: &mut [u8])
        -> Result<()>;

    /// Decrypts `input` under CBC, chaining from `iv`. Same length
    /// requirements as [`encrypt_cbc`](Self::encrypt_cbc).
    fn decrypt_cbc(&self, key: &[u8], iv: &mut Block, input: &[u8], output: &mut [u8])
        -> Result<()>;
}

/// Reports whether the running CPU exposes hardware AES, memoized after
/// the first call.
pub fn cpu_aes_supported() -> bool {
    static FLAG: OnceLock<bool> = OnceLock::new();
    *FLAG.get_or_init(|| {
        #[cfg(target_arch = "x86_64")]
        {
            std::is_x86_feature_detected!("aes")
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            false
        }
    })
}

/// A stub [`AesBlockEngine`] that performs no cryptography and always
/// reports itself unsupported. Exists so call sites that depend on the
/// trait have a concrete type to wire up in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAesEngine;

impl AesBlockEngine for NullAesEngine {
    fn supported(&self) -> bool {
        false
    }

    fn encrypt_ecb(&self, _key: &[u8], _block: &Block) -> Result<Block> {
        Err(crate::error::EcpError::Generic("no AES engine is wired up".into()))
    }

    fn decrypt_ecb(&self, _key: &[u8], _block: &Block) -> Result<Block> {
        Err(crate::error::EcpError::Generic("no AES engine is wired up".into()))
    }

    fn encrypt_cbc(
        &self,
        _key: &[u8],
        _iv: &mut Block,
        _input: &[u8],
        _output: &mut [u8],
    ) -> Result<()> {
        Err(crate::error::EcpError::Generic("no AES engine is wired up".into()))
    }

    fn decrypt_cbc(
        &self,
        _key: &[u8],
        _iv: &mut Block,
        _input: &[u8],
        _output: &mut [u8],
    ) -> Result<()> {
        Err(crate::error::EcpError::Generic("no AES engine is wired up".into()))
    }
}
