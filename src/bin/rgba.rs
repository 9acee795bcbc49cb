use anstream::println;
use clap::{arg, command, value_parser};
use owo_colors::OwoColorize;
use random_rgba::{clamp_count, ColorGen, Opacity, Rgba};

pub fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .arg(
            arg!([count] "Number of colors to generate")
                .default_value("1")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            arg!(-a --alpha <ALPHA> "Opacity of the colors")
                .alias("opacity")
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(-q --quiet "Quiet, only show the color strings"))
        .arg(arg!(--seed <SEED> "Seed the pseudorandom generator").value_parser(value_parser!(u64)))
        .arg(
            arg!(--color <WHEN> "Controls when to use color")
                .default_value("auto")
                .value_parser(clap::builder::EnumValueParser::<clap::ColorChoice>::new()),
        )
        .get_matches();

    let color = match matches
        .get_one::<clap::ColorChoice>("color")
        .expect("default color value")
    {
        clap::ColorChoice::Auto => anstream::ColorChoice::Auto,
        clap::ColorChoice::Always => anstream::ColorChoice::Always,
        clap::ColorChoice::Never => anstream::ColorChoice::Never,
    };
    color.write_global();

    let count = clamp_count(*matches.get_one::<i64>("count").expect("default count"));
    let alpha = matches
        .get_one::<f64>("alpha")
        .copied()
        .map(Opacity)
        .unwrap_or_default();
    let seed = matches.get_one::<u64>("seed").copied();
    let quiet = matches.get_flag("quiet");

    let mut gen = if let Some(seed) = seed {
        ColorGen::with_seed(seed)
    } else {
        ColorGen::new()
    };

    for rgba in gen.colors_with_opacity(count, alpha) {
        if quiet {
            println!("{rgba}");
        } else {
            println!("{rgba} {}", swatch(&rgba));
        }
    }

    Ok(())
}

fn swatch(rgba: &Rgba) -> String {
    let color = owo_colors::DynColors::Rgb(rgba.r, rgba.g, rgba.b);
    "      ".on_color(color).to_string()
}
