//! DCPU-16 Disassembler - CLI Entry Point
//!
//! Commands:
//! - `dcpu16-disasm dump <image>` - Disassemble a binary image file
//! - `dcpu16-disasm decode <words...>` - Decode words given in hex
//! - `dcpu16-disasm test` - Run the built-in self-test

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dcpu16-disasm")]
#[command(version = "0.1.0")]
#[command(about = "A disassembler for the DCPU-16, the 16-bit CPU of the game 0x10c")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Disassemble a binary program image
    Dump {
        /// Path to the image file
        image: String,
        /// Read words high byte first
        #[arg(short, long)]
        big_endian: bool,
        /// Emit the listing as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Decode machine words given on the command line
    Decode {
        /// Hex words, e.g. 7c01 0030
        words: Vec<String>,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dump { image, big_endian, json }) => {
            dump_image(&image, big_endian, json);
        }
        Some(Commands::Decode { words }) => {
            decode_words(&words);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("DCPU-16 Disassembler v0.1.0");
            println!("Turns DCPU-16 machine words back into assembly");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_decode();
        }
    }
}

fn dump_image(path: &str, big_endian: bool, json: bool) {
    use dcpu16::{disassemble, disassemble_entries, load_image, ByteOrder};

    let order = if big_endian { ByteOrder::Big } else { ByteOrder::Little };

    let image = match load_image(path, order) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("❌ Failed to load image: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        let entries = disassemble_entries(&image.words);
        match serde_json::to_string_pretty(&entries) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("❌ Failed to serialize listing: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("📖 Disassembling: {} ({} words)", path, image.len());
        println!();
        print!("{}", disassemble(&image.words));
    }
}

fn decode_words(args: &[String]) {
    use dcpu16::{disassemble, Word};

    if args.is_empty() {
        eprintln!("❌ No words given (expected hex, e.g. 7c01 0030)");
        std::process::exit(1);
    }

    let mut words: Vec<Word> = Vec::with_capacity(args.len());
    for arg in args {
        let digits = arg.trim_start_matches("0x");
        match Word::from_str_radix(digits, 16) {
            Ok(word) => words.push(word),
            Err(_) => {
                eprintln!("❌ Not a 16-bit hex word: {}", arg);
                std::process::exit(1);
            }
        }
    }

    print!("{}", disassemble(&words));
}

fn demo_decode() {
    use dcpu16::disassemble;

    println!("━━━ Demo ━━━");
    println!();

    // SET A, B / SET A, 0x0030 / SET [0x1000], 0x0020 / JSR 0x23
    let words = [0x0401, 0x7C01, 0x0030, 0x7DE1, 0x1000, 0x0020, 0x8C10];
    print!("{}", disassemble(&words));

    println!();
    println!("✓ Try `dump <image>` on a binary program image");
}

fn run_self_test() {
    use dcpu16::{decode_instruction, decode_value, disassemble_entries, DecodeError};

    println!("━━━ DCPU-16 Disassembler Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: register operands
    print!("Register operands... ");
    let ok = decode_instruction(&[0x0401, 0, 0])
        .map(|d| d.width == 1 && d.text == "SET A, B")
        .unwrap_or(false);
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 2: trailing-word literal
    print!("Trailing-word literal... ");
    let ok = decode_instruction(&[0x7C01, 0x0030, 0])
        .map(|d| d.width == 2 && d.text == "SET A, 0x0030")
        .unwrap_or(false);
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 3: both operands pulling trailing words
    print!("Indirect and literal operands... ");
    let ok = decode_instruction(&[0x7DE1, 0x1000, 0x0020])
        .map(|d| d.width == 3 && d.text == "SET [0x1000], 0x0020")
        .unwrap_or(false);
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 4: JSR renders its raw operand field
    print!("JSR raw operand... ");
    let ok = decode_instruction(&[0x8C10, 0, 0])
        .map(|d| d.width == 1 && d.text == "JSR 0x23")
        .unwrap_or(false);
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 5: every operand code renders something
    print!("Operand space is total... ");
    let ok = (0..0x40).all(|code| !decode_value(code, 0x1234).text.is_empty());
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 6: unknown extended opcode is an error
    print!("Unknown extended opcode... ");
    let ok = matches!(
        decode_instruction(&[0x0000, 0, 0]),
        Err(DecodeError::InvalidExtendedOpcode(0x00))
    );
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 7: listing resynchronizes after a bad word
    print!("Listing resynchronizes... ");
    let entries = disassemble_entries(&[0x0000, 0x0401]);
    let ok = entries.len() == 2 && entries[0].text == "???" && entries[1].text == "SET A, B";
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
