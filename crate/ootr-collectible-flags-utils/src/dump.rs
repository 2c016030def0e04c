#![deny(rust_2018_idioms, unused, unused_import_braces, unused_lifetimes, unused_qualifications, warnings)]
#![forbid(unsafe_code)]

use {
    std::{
        fs::{
            self,
            File,
        },
        io::{
            self,
            BufReader,
        },
        path::PathBuf,
    },
    clap::Parser as _,
    log::info,
    thiserror::Error,
    ootr::Location,
    ootr_collectible_flags::{
        OverflowPolicy,
        table,
    },
};

const DIRECTORY_FILENAME: &str = "collectible_flag_table.bin";
const ALT_OVERRIDES_FILENAME: &str = "collectible_alt_overrides.bin";

#[derive(clap::Parser)]
#[clap(version)]
struct Args {
    /// A JSON file containing the list of locations.
    input: PathBuf,
    /// Where to write the encoded tables.
    #[clap(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// Cut out-of-range values down to their field's width instead of failing, like the randomizer does.
    #[clap(long)]
    truncate: bool,
    /// Also print the flag table as JSON.
    #[clap(long)]
    print_table: bool,
}

impl Args {
    fn policy(&self) -> OverflowPolicy {
        if self.truncate { OverflowPolicy::Truncate } else { OverflowPolicy::Reject }
    }
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)] Encode(#[from] ootr_collectible_flags::Error),
    #[error(transparent)] Io(#[from] io::Error),
    #[error(transparent)] Json(#[from] serde_json::Error),
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();
    let locations = serde_json::from_reader::<_, Vec<Location>>(BufReader::new(File::open(&args.input)?))?;
    info!("read {} locations from {}", locations.len(), args.input.display());
    if args.print_table {
        let (scene_flags, _) = table::collectible_flag_table(&locations, args.policy())?;
        println!("{}", serde_json::to_string_pretty(&scene_flags)?);
    }
    let tables = ootr_collectible_flags::build(&locations, args.policy())?;
    fs::create_dir_all(&args.out_dir)?;
    fs::write(args.out_dir.join(DIRECTORY_FILENAME), &tables.directory)?;
    fs::write(args.out_dir.join(ALT_OVERRIDES_FILENAME), &tables.alt_overrides)?;
    println!("{} bytes of collectible flags", tables.num_flag_bytes);
    Ok(())
}
