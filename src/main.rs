use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use el_data::cldr::{self, ExemplarSource};
use el_data::codepoints::{
    chars_to_codepoints, codepoints_to_chars, encode_text, get_code_units, hexdump, CodeValue,
    CodepointForm, EncodingForm, Radix,
};
use el_data::db::DEFAULT_ENCODINGS;
use el_data::encodings::Encodings;
use el_data::ethiopic::{self, EthiopicString};
use el_data::property::get_property_str;
use el_data::report::{self, EncodingMode};
use el_data::uset::{uset_contains, uset_to_list, uset_to_pattern, SetMode};
use el_data::{LookupDb, NameChoice, Property, Settings, UcdString};

#[derive(Parser, Debug)]
#[command(name = "eldata", author, version, about, long_about = None)]
struct Cli {
    /// Path to the lookup database
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// JSON settings file; EL_DATA_* environment variables are used otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Character property table, or JSON Lines with --json
    Udata {
        text: String,
        #[arg(long)]
        json: bool,
        /// Output file for --json (stdout otherwise)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Case mappings of a single character
    Casing { character: String },
    /// Numeric and entity values
    Entities { text: String },
    /// Byte sequence of each character
    Bytes {
        text: String,
        #[arg(short, long, default_value = "utf-8")]
        encoding: String,
    },
    /// Codepoints, bytes or code units laid out per character
    Encoding {
        text: String,
        #[arg(short, long, default_value = "utf-8")]
        encoding: String,
        #[arg(short, long, value_enum, default_value_t = EncodingArg::CodepointsBytes)]
        mode: EncodingArg,
    },
    /// Code units in UTF-8, UTF-16 or UTF-32
    CodeUnits {
        text: String,
        #[arg(short, long, default_value = "utf-8")]
        encoding: String,
        #[arg(long)]
        decimal: bool,
        #[arg(long)]
        per_char: bool,
    },
    /// Codepoints of a string
    Codepoints {
        text: String,
        #[arg(long)]
        decimal: bool,
        /// Split supplementary characters into surrogate pairs
        #[arg(long)]
        utf16: bool,
    },
    /// String from hex codepoints
    Chars {
        codepoints: Vec<String>,
        #[arg(long)]
        utf16: bool,
    },
    /// Hex dump of the encoded string
    Hexdump {
        text: String,
        #[arg(short, long, default_value = "utf-8")]
        encoding: String,
    },
    /// Value of a Unicode property for one character
    Property {
        character: String,
        property: String,
        #[arg(long)]
        short: bool,
    },
    /// Expand, normalise or test a UnicodeSet expression
    Uset {
        notation: String,
        /// Test these characters against the set
        #[arg(long)]
        test: Option<String>,
        #[arg(long, value_enum, default_value_t = SetModeArg::All)]
        mode: SetModeArg,
        #[arg(long)]
        pattern: bool,
    },
    /// Ethiopic family and order data
    Ethiopic(EthiopicArgs),
    /// Unihan fields of a character
    Unihan {
        character: String,
        /// Fields to show; all populated fields if omitted
        fields: Vec<String>,
    },
    /// Exemplar characters of a locale
    Exemplars {
        locale: String,
        #[arg(long)]
        sldr: bool,
    },
    /// Encodings in which a byte decodes to a character
    MatchByte { character: String, byte: String },
    /// Lookup database maintenance
    Db {
        #[command(subcommand)]
        command: DbCommand,
    },
}

#[derive(Args, Debug)]
struct EthiopicArgs {
    text: Option<String>,
    /// Convert syllables to this order (name, romanisation or number)
    #[arg(long)]
    convert: Option<String>,
    /// Only convert the character at this index
    #[arg(long, requires = "convert")]
    index: Option<usize>,
    /// Syllables of the orders in range notation, e.g. 1-3,7
    #[arg(long)]
    orders: Option<String>,
    /// Syllables of the families in range notation
    #[arg(long)]
    families: Option<String>,
    #[arg(long)]
    normalise: bool,
}

#[derive(Subcommand, Debug)]
enum DbCommand {
    /// Create the schema and seed the Ethiopic and encoding tables
    Init {
        #[arg(long, value_delimiter = ',')]
        encodings: Option<Vec<String>>,
    },
    /// Import Unihan_*.txt files
    ImportUnihan { files: Vec<PathBuf> },
    /// Import Unikemet.txt
    ImportUnikemet { files: Vec<PathBuf> },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EncodingArg {
    CodepointsBytes,
    Codepoints,
    Bytes,
    CodeUnits,
}

impl From<EncodingArg> for EncodingMode {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::CodepointsBytes => EncodingMode::CodepointsBytes,
            EncodingArg::Codepoints => EncodingMode::Codepoints,
            EncodingArg::Bytes => EncodingMode::Bytes,
            EncodingArg::CodeUnits => EncodingMode::CodeUnits,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SetModeArg {
    All,
    Some,
    None,
    Contains,
}

impl From<SetModeArg> for SetMode {
    fn from(arg: SetModeArg) -> Self {
        match arg {
            SetModeArg::All => SetMode::All,
            SetModeArg::Some => SetMode::Some,
            SetModeArg::None => SetMode::None,
            SetModeArg::Contains => SetMode::Contains,
        }
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_json_file(path)
            .with_context(|| format!("reading settings from {}", path.display()))?,
        None => Settings::from_env()?,
    };
    if let Some(db) = &cli.db {
        settings.db = db.clone();
    }
    Ok(settings)
}

fn write_jsonl(text: &str, output: Option<&PathBuf>) -> anyhow::Result<()> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::with_capacity(262144, sink);
    for record in UcdString::new(text).data() {
        writeln!(writer, "{}", serde_json::to_string(&record)?)?;
    }
    writer.flush()?;
    Ok(())
}

fn print_chars(chars: &[char]) {
    println!("{}", chars.iter().collect::<String>());
}

fn run_ethiopic(db: &LookupDb, args: &EthiopicArgs) -> anyhow::Result<()> {
    if let Some(orders) = &args.orders {
        print_chars(&ethiopic::syllables_for_orders(db, orders)?);
    }
    if let Some(families) = &args.families {
        print_chars(&ethiopic::syllables_for_families(db, families)?);
    }
    let text = match &args.text {
        Some(text) => text,
        None if args.orders.is_some() || args.families.is_some() => return Ok(()),
        None => bail!("nothing to do: give a string, --orders or --families"),
    };
    if let Some(order) = &args.convert {
        println!("{}", EthiopicString::new(db, text)?.convert_order(order, args.index)?);
    } else if args.normalise {
        println!("{}", ethiopic::normalise_homophones(db, text)?);
    } else {
        report::print_ethiopic_data(db, text)?;
    }
    Ok(())
}

fn run_db(settings: &Settings, command: &DbCommand) -> anyhow::Result<()> {
    let db = LookupDb::create(&settings.db)?;
    let start = Instant::now();
    match command {
        DbCommand::Init { encodings } => {
            let syllables = db.seed_ethiopic()?;
            let labels: Vec<&str> = match encodings {
                Some(labels) => labels.iter().map(String::as_str).collect(),
                None => DEFAULT_ENCODINGS.to_vec(),
            };
            let seeded = db.seed_encodings(&labels)?;
            println!("Seeded {} syllables and {} encodings", syllables, seeded);
        }
        DbCommand::ImportUnihan { files } => {
            for path in files {
                let reader = BufReader::new(File::open(path)?);
                let count = db.import_unihan(reader)?;
                println!("{}: {} values", path.display(), count);
            }
        }
        DbCommand::ImportUnikemet { files } => {
            for path in files {
                let reader = BufReader::new(File::open(path)?);
                let count = db.import_unikemet(reader)?;
                println!("{}: {} values", path.display(), count);
            }
        }
    }
    info!("{} finished in {:.2}s", settings.db.display(), start.elapsed().as_secs_f32());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    match &cli.command {
        Command::Udata { text, json, output } => {
            if *json {
                write_jsonl(text, output.as_ref())?;
            } else {
                report::print_unicode_data(text);
            }
        }
        Command::Casing { character } => report::print_casing_data(character)?,
        Command::Entities { text } => report::print_entities(text),
        Command::Bytes { text, encoding } => report::print_byte_sequences(text, encoding)?,
        Command::Encoding { text, encoding, mode } => {
            report::print_encoding_data(text, encoding, (*mode).into())?
        }
        Command::CodeUnits { text, encoding, decimal, per_char } => {
            let radix = if *decimal { Radix::Decimal } else { Radix::Hex };
            let units = get_code_units(text, EncodingForm::from_label(encoding), radix, *per_char);
            println!("{}", serde_json::to_string(&units)?);
        }
        Command::Codepoints { text, decimal, utf16 } => {
            let radix = if *decimal { Radix::Decimal } else { Radix::Hex };
            let form = if *utf16 { CodepointForm::Utf16 } else { CodepointForm::Utf32 };
            let values = chars_to_codepoints(text, radix, form);
            println!(
                "{}",
                values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
            );
        }
        Command::Chars { codepoints, utf16 } => {
            let form = if *utf16 { CodepointForm::Utf16 } else { CodepointForm::Utf32 };
            let values: Vec<CodeValue> = codepoints.iter().map(|s| CodeValue::from(s.as_str())).collect();
            println!("{}", codepoints_to_chars(&values, form)?);
        }
        Command::Hexdump { text, encoding } => print!("{}", hexdump(&encode_text(text, encoding)?)),
        Command::Property { character, property, short } => {
            let choice = if *short { NameChoice::Short } else { NameChoice::Long };
            let property = Property::from_name(property)?;
            println!("{}", get_property_str(character, property, choice)?);
        }
        Command::Uset { notation, test, mode, pattern } => match test {
            Some(chars) => println!("{}", uset_contains(chars, notation, (*mode).into())?),
            None if *pattern => println!("{}", uset_to_pattern(notation)?),
            None => println!("{}", uset_to_list(notation)?.join(" ")),
        },
        Command::Ethiopic(args) => {
            let db = LookupDb::open(&settings.db);
            run_ethiopic(&db, args)?;
        }
        Command::Unihan { character, fields } => {
            let db = LookupDb::open(&settings.db);
            let ch = el_data::Ucd::parse(character)?.character();
            let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
            report::print_unihan_data(&db, ch, &fields)?;
        }
        Command::Exemplars { locale, sldr } => {
            let source = if *sldr { ExemplarSource::Sldr } else { ExemplarSource::Cldr };
            match cldr::get_exemplars(&settings, locale, source)? {
                Some(exemplars) => report::print_exemplar_table(locale, &exemplars),
                None => bail!("no locale data found for {}", locale),
            }
        }
        Command::MatchByte { character, byte } => {
            let db = LookupDb::open(&settings.db);
            let ch = el_data::Ucd::parse(character)?.character();
            let matches = Encodings::new(&db)?.match_character(ch, &CodeValue::from(byte.as_str()))?;
            println!("{}", matches.join(", "));
        }
        Command::Db { command } => run_db(&settings, command)?,
    }
    Ok(())
}
