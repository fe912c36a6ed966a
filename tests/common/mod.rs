//! Shared fixtures for the integration tests.
//!
//! Vectors:
//! - `RSA2048_*`: a 2048-bit key (e = 65537) and an `rsa-sha2-512` SSHSIG
//!   over `"hello world\n"` in namespace `file`. The digest is that of the
//!   SSHSIG signed data.
//! - `RSA4096_*`: a 4096-bit key (e = 65537) and a raw signature whose
//!   padded block carries a SHA-512 DigestInfo.
#![allow(dead_code)]

use num_bigint::BigUint;
use sshsig_rsa::{
    encoding::WireWriter,
    signatures::sshsig::{MAGIC, RawSignature, RsaPublicKey, SignatureEnvelope},
};

pub const MESSAGE: &[u8] = b"hello world\n";
pub const NAMESPACE: &[u8] = b"file";

pub const RSA2048_MODULUS: &[&str] = &[
    "d6f61579064cab5f050f7e05af31f8f20b31bca2f239790915aa246bd58444be",
    "d3ba4c49096e30be6692a4d056bcddf90dca13bb2d26967f79ae463291939cc3",
    "3f6b8df94cb1da2426c1d939c0a6c87d6852b663edf891246232015729c00712",
    "6e350af5f3c2a85fd3e96277a6e0a9345035c42f57e026488722bd8180b2b37f",
    "65dec5d4f7e064db1b743df450cd577a8c67c6c8e176a4cbe9a81d250c596a7e",
    "b495d33ab46873681e4da3897b0b78422b47836a8b0a66b7ca960b13cdbd3798",
    "12b95ab142c704ebdad5762e9086432eaacc1916ae66a94670d7d628b79a1408",
    "ac892a9d85ba04a9ab14fe12feefbd2ccf6420c5d1a19f2a1aee7721c46c9cc9",
];

pub const RSA2048_SIGNATURE: &[&str] = &[
    "a69b0d51c2deb76ba5fb76870e6a20c292f251503ba104a432fde6a4e9da5ddb",
    "73b6a7a80ab35584dabfd2a4b0dfe7fe87e127a7ffb6339cf0b23882a5f25c89",
    "7fa53c7ff0ac420987f59fff516c51b1d6d446de982d7fe1c4d6bb9c4b6eeb52",
    "a27161e363122303cfd554c25f0986e286e18f389d0b519d02b76a15c89225df",
    "3b6cc8ee03beb72348c2bec68dbfe3ac85c19bf6621e7effbf860bc6669ab9d8",
    "8dae6950fc3365599b1973b52adc46bab9ac40652d3dedad3834cc23489f803a",
    "b0827ecf8b53f687c235f0c1ed314667cf9d5193f88e752c2d78ad9e7bac7f68",
    "4abb7e7a9862677d929ba52202576827becb05a23bf3d231967d79b1cb27b55d",
];

pub const RSA2048_DIGEST: &[&str] = &[
    "766f794844a18ccb789fa185268f645b88fe703b77ec9c75ace7ff24a78f1d7a",
    "25e12544873b8aad18ebc033d5939ff8c7f488ed494d85b211733a871db63648",
];

pub const RSA2048_ARMORED: &str = "\
-----BEGIN SSH SIGNATURE-----
U1NIU0lHAAAAAQAAARcAAAAHc3NoLXJzYQAAAAMBAAEAAAEBANb2FXkGTKtfBQ9+Ba8x+P
ILMbyi8jl5CRWqJGvVhES+07pMSQluML5mkqTQVrzd+Q3KE7stJpZ/ea5GMpGTnMM/a435
TLHaJCbB2TnApsh9aFK2Y+34kSRiMgFXKcAHEm41CvXzwqhf0+lid6bgqTRQNcQvV+AmSI
civYGAsrN/Zd7F1PfgZNsbdD30UM1XeoxnxsjhdqTL6agdJQxZan60ldM6tGhzaB5No4l7
C3hCK0eDaosKZrfKlgsTzb03mBK5WrFCxwTr2tV2LpCGQy6qzBkWrmapRnDX1ii3mhQIrI
kqnYW6BKmrFP4S/u+9LM9kIMXRoZ8qGu53IcRsnMkAAAAEZmlsZQAAAAAAAAAGc2hhNTEy
AAABFAAAAAxyc2Etc2hhMi01MTIAAAEAppsNUcLet2ul+3aHDmogwpLyUVA7oQSkMv3mpO
naXdtztqeoCrNVhNq/0qSw3+f+h+Enp/+2M5zwsjiCpfJciX+lPH/wrEIJh/Wf/1FsUbHW
1EbemC1/4cTWu5xLbutSonFh42MSIwPP1VTCXwmG4obhjzidC1GdArdqFciSJd87bMjuA7
63I0jCvsaNv+OshcGb9mIefv+/hgvGZpq52I2uaVD8M2VZmxlztSrcRrq5rEBlLT3trTg0
zCNIn4A6sIJ+z4tT9ofCNfDB7TFGZ8+dUZP4jnUsLXitnnusf2hKu356mGJnfZKbpSICV2
gnvssFojvz0jGWfXmxyye1XQ==
-----END SSH SIGNATURE-----
";

pub const RSA4096_MODULUS: &[&str] = &[
    "bc87de23a1304d3b48f74b0e1568a35cf91a4498312b4ab1e8e7f4ff66df8ba3",
    "e2ec552e03f6ad9eaf5c20094ccbd24eb24f066936bb8bac87ac79ce9bb9c1ee",
    "d62966fe300ba48089764d3a2b9a79d309a2076c5ecaea0e3a28b2b20e790eb5",
    "95b1527fd4ff15f1fa6a2709cf7a6e8af3a9e6b346ae8671b2c900a769456ea9",
    "96aa9f3939cd89715d0a41d695d9f0e66fb2683ac27f68e466555078696c5966",
    "82486f528d9e2944801054c431c4625468734f850cfd1193741f6494bc013e97",
    "eeedb17da39c542647fb03265d08aea75fc7ee63ec03290aa27171cadaee1a9e",
    "96af9e6e827ce501bf8105d7a181b684be37b3acc95d1d3697364566e697bc17",
    "1e7c6ce1a0bbc4eea6ccfd28e9f13811491f3790f127fda1bf331e0df56f10db",
    "e606db9456e57d85607305c34f71b360070c1e090c0050d779de40c1d5f16780",
    "a77121ef0d9d02c09f839779a90c77b1262dae2075805a66673499301502f4a2",
    "660fa3136a4a77aa8d9a61efe846876ff9498f3df83c96eae691b91d02ea66c7",
    "c662cd2e4e512dcb9ea4309d97d8ad40748917feb84b0b04478049f19a385f06",
    "10fce28f6f101400969d6c042c49ec16177201bd9576ff6b52d25587e5130b77",
    "b182a5b7761485f31d05940eb4e9fff8cef7debe2b8b466947d9bac82c2e260a",
    "fea668bfbd53bdc6cb5e5b534b8f52f265a46ef98264d15eed41c343bf31f6e5",
];

pub const RSA4096_SIGNATURE: &[&str] = &[
    "4fd883ed7e03d1105c9b015c5cabae4c06eeaeb2b7f390bc6987b441997131d7",
    "9d5472bc279c22c667693189525eb48d62e7de940acfa035f773eb22a24f9119",
    "7dbadae9b3d27d75add54b78a62dcd9a1b1e090dbc42066f6df6df4c9fa7b150",
    "097586c58bb487c58e466e578b9bc8f1747fe76bc07baa514637d17633526a67",
    "cf7ee2d0232fb95044cef798c6c3c8cb3603592c1bbcc2f3f1bb690ec1d6f14f",
    "83e5ab7f59727ef1a62080e10dde4fb501bb97bcc90cb60ac22db2faf3b72823",
    "6a65def79725cacd4c847337d0c93d5c31470ac47598ef9e2f33967f4e40b83d",
    "a263c90c48d4c9d7958a3832bbdfa4d5430f8a9890646304a800cb933af87343",
    "742a536bb7a0a727e3b9e8ba2ac9721f2a78da0c1b5e4e5f9f5f7e74ea8743b5",
    "f29c4b1d2789b09366719fd8299421d6c4d31a9dbe6f92653de43032d342df3c",
    "32087ed414bdfa25027124074875cab6f297e2256172d836f1d4f0b2587e43cc",
    "f6257ed9eeec6730b986e3e6dd12e626909edad78fc5f30a8d1bc122cf65954d",
    "0f544f42621206defc77d82bfbe59444e5d5104e16d83c230c94ed1d456b1730",
    "48c9660e8e778e41fe805a0cfdc4baf410994bdcf6614affb8d01b6824ca3f82",
    "16f6dd1a87c91563d14032e14efaf24fcdf644a80fe86c89d1e4af513ff2f064",
    "cde0a0315d5bf360d60f92a00d10fd1027988898c82616bdc7349c1bdfad7945",
];

pub const RSA4096_DIGEST: &[&str] = &[
    "bed2662fe0f7b308ad3b5d19ca0d77af4235ce8b0e39a2986440658df91a32e5",
    "03813121336ac764a10fb6e508d205b5ebaf0a291876385634a86cfea2d688cd",
];

pub fn unhex(chunks: &[&str]) -> Vec<u8> {
    hex::decode(chunks.concat()).unwrap()
}

pub fn biguint(chunks: &[&str]) -> BigUint {
    BigUint::from_bytes_be(&unhex(chunks))
}

/// Public-key blob with the modulus written as an SSH mpint.
pub fn rsa_public_key_blob(exponent: &[u8], modulus: &[u8]) -> Vec<u8> {
    let mut mpint = Vec::with_capacity(modulus.len() + 1);
    if modulus.first().is_some_and(|&b| b & 0x80 != 0) {
        mpint.push(0);
    }
    mpint.extend_from_slice(modulus);

    let mut w = WireWriter::new();
    w.put_string(b"ssh-rsa").unwrap();
    w.put_string(exponent).unwrap();
    w.put_string(&mpint).unwrap();
    w.into_bytes()
}

pub fn signature_blob(algorithm: &str, signature: &[u8]) -> Vec<u8> {
    RawSignature {
        algorithm: algorithm.to_owned(),
        magnitude: signature.to_vec(),
        peeled: false,
    }
    .to_blob()
    .unwrap()
}

/// Envelope bytes around the given blobs, with the namespace and hash
/// fields of the 2048-bit vector.
pub fn envelope_bytes(public_key: &[u8], signature: &[u8]) -> Vec<u8> {
    SignatureEnvelope {
        version: 1,
        public_key,
        namespace: NAMESPACE,
        reserved: b"",
        hash_algorithm: b"sha512",
        signature,
    }
    .to_bytes()
    .unwrap()
}

pub fn rsa2048_envelope() -> Vec<u8> {
    let public_key = rsa_public_key_blob(&[0x01, 0x00, 0x01], &unhex(RSA2048_MODULUS));
    let signature = signature_blob("rsa-sha2-512", &unhex(RSA2048_SIGNATURE));

    envelope_bytes(&public_key, &signature)
}

pub fn rsa4096_envelope() -> Vec<u8> {
    let public_key = rsa_public_key_blob(&[0x01, 0x00, 0x01], &unhex(RSA4096_MODULUS));
    let signature = signature_blob("rsa-sha2-512", &unhex(RSA4096_SIGNATURE));

    envelope_bytes(&public_key, &signature)
}

/// Hand-assembled envelope, independent of `SignatureEnvelope::to_bytes`.
pub fn manual_envelope(fields: [&[u8]; 5], version: u32) -> Vec<u8> {
    let mut out = MAGIC.to_vec();
    out.extend_from_slice(&version.to_be_bytes());
    for field in fields {
        out.extend_from_slice(&(field.len() as u32).to_be_bytes());
        out.extend_from_slice(field);
    }
    out
}

pub fn rsa2048_key() -> RsaPublicKey {
    let blob = rsa_public_key_blob(&[0x01, 0x00, 0x01], &unhex(RSA2048_MODULUS));
    RsaPublicKey::from_blob(&blob).unwrap()
}
