use {
    crate::Error,
    anyhow::anyhow,
    neofs_test_contracts::interop::Hash160,
    p256::ecdsa::SigningKey,
    std::{fs, io::Read, path::Path},
};

/// Parses a script hash written in big-endian hex, with or without `0x`.
pub fn parse_hash160(value: &str) -> Result<Hash160, String> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(value).map_err(|e| format!("{}", e))?;
    let bytes: [u8; 20] = bytes
        .try_into()
        .map_err(|_| "script hash must be 20 bytes".to_string())?;
    Ok(Hash160::from_be_bytes(bytes))
}

/// Parses a hex encoded secp256r1 private key.
pub fn parse_signing_key(value: &str) -> Result<SigningKey, String> {
    let bytes = hex::decode(value.trim()).map_err(|e| format!("{}", e))?;
    SigningKey::from_slice(&bytes).map_err(|_| "invalid secp256r1 private key".to_string())
}

/// Reads the marshalled container, `-` meaning standard input.
pub fn read_container(path: &Path) -> Result<Vec<u8>, Error> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    fs::read(path)
        .map_err(|e| anyhow!("Could not read container {}: {}", path.display(), e).into())
}
