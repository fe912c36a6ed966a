use std::{
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context as _, bail};
use clap::{Parser, ValueEnum};
use num_bigint::BigUint;
use sshsig_rsa::{
    encoding::decode_armored,
    hash::HashAlgorithm,
    signatures::sshsig::{VerificationResult, VerifyOptions, verify_message, verify_with},
};

/// Opens an RSA SSHSIG signature and prints the padded block and digest.
#[derive(Debug, Parser)]
#[command(name = "sshsig-inspect", version)]
struct Arguments {
    /// Armored signature file. Reads stdin when omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Signed message. When given, checks that the signature carries its digest.
    #[arg(short, long)]
    message: Option<PathBuf>,

    /// Digest expected inside the PKCS#1 block.
    #[arg(short, long, value_enum, default_value_t = Digest::Sha512)]
    digest: Digest,

    /// Accepted public-key type. Repeat to accept several.
    #[arg(long = "key-type", default_values_t = [String::from("ssh-rsa")])]
    key_types: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Digest {
    Sha256,
    Sha512,
}

impl From<Digest> for HashAlgorithm {
    fn from(value: Digest) -> Self {
        match value {
            Digest::Sha256 => HashAlgorithm::Sha256,
            Digest::Sha512 => HashAlgorithm::Sha512,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Arguments::parse();

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            eprintln!("Paste your SSHSIG (base64), then Ctrl-D:");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let bytes = decode_armored(&text).context("decoding signature text")?;
    let options = VerifyOptions::default()
        .with_key_types(args.key_types.clone())
        .with_digest(args.digest.into());

    let (result, bound) = match &args.message {
        Some(path) => {
            let message =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let checked = verify_message(&bytes, &message, &options)?;
            (checked.result, Some(checked.bound))
        }
        None => (verify_with(&bytes, &options)?, None),
    };

    report(&result);

    match bound {
        Some(true) => println!("\n✔ Signature carries the digest of the message"),
        Some(false) => println!("\n✖ Signature does NOT carry the digest of the message"),
        None => {}
    }

    if !result.matches {
        bail!("s^e mod n does not match the padded block");
    }

    Ok(if bound == Some(false) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn report(result: &VerificationResult) {
    if result.matches {
        println!("✔ Verification: s^e mod n equals the padded block");
    } else {
        println!("✖ Verification FAILED: s^e mod n does not match the padded block");
    }

    let key = &result.public_key;
    println!("\nkey type: {}", key.key_type);
    println!("signature algorithm: {}", result.signature.algorithm);
    if result.signature.peeled {
        println!("note: a redundant length prefix was stripped from the signature");
    }
    println!("e (decimal): {}", key.exponent);
    println!("n (hex): {}", minimal_hex(&key.modulus));
    println!("s (decimal): {}", result.signature_value);
    println!("s (hex): {}", minimal_hex(&result.signature_value));

    println!("\n=== full padded block m = s^e mod n (hex) ===");
    println!("{}", hex::encode(&result.block));

    println!("\n=== extracted digest (hex) ===");
    println!("{}", hex::encode(&result.digest));
}

fn minimal_hex(value: &BigUint) -> String {
    hex::encode(value.to_bytes_be())
}
