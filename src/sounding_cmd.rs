//! Sounding command: one profile in, one indices record out.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use aeolus_sounding::analyze;

use crate::cli::SoundingArgs;
use crate::{config, input, output, synthetic};

/// Run the sounding analysis pipeline.
pub fn run(args: SoundingArgs) -> Result<()> {
    let _cmd = info_span!("sounding").entered();

    // 1. Load config
    let config = config::load(args.config.as_deref())?;

    // 2. Obtain a profile
    let file = if args.synthetic {
        let seed = args.seed.unwrap_or(config.synthetic.seed);
        info!(seed, "generating synthetic sounding");
        synthetic::sounding(&config.synthetic, seed)
    } else {
        let path = args
            .input
            .ok_or_else(|| anyhow!("no input: pass --input <FILE> or --synthetic"))?;
        info!(path = %path.display(), "reading sounding");
        input::SoundingFile::read(&path)?
    };

    // 3. Validate and analyze
    let sounding = file.as_sounding().context("invalid sounding")?;
    info!(n_levels = sounding.len(), "sounding loaded");
    let indices = analyze(&sounding);

    info!(
        cape = indices.cape,
        tornado = %indices.tornado_potential,
        severe_thunderstorm = %indices.severe_thunderstorm_potential,
        hail = %indices.hail_potential,
        "indices computed"
    );

    // 4. Emit the record
    output::write_json(args.output, &indices)
}
