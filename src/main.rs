use structopt::StructOpt;

use log::debug;

use textmill::cli;
use textmill::corpus::{describe, Categorization, TextCorpus};
use textmill::error::Error;
use textmill::pipeline::Preprocessor;

/// Empty filter lists mean "no filter".
fn filter(values: &[String]) -> Option<&[String]> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

fn categorization(by_dir: bool) -> Categorization {
    if by_dir {
        Categorization::DirectoryDerived
    } else {
        Categorization::FilenameDerived
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Textmill::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Textmill::Preprocess(p) => {
            let corpus = TextCorpus::new(&p.src, categorization(p.by_dir))?;
            let preprocessor = Preprocessor::new(corpus, &p.dst);
            let produced = preprocessor.transform(
                filter(&p.files),
                filter(&p.categories),
                p.chunksize,
                p.normalize,
            )?;
            for path in produced {
                println!("{}", path.display());
            }
        }

        cli::Textmill::Describe(d) => {
            let corpus = TextCorpus::new(&d.src, categorization(d.by_dir))?;
            let stats = describe(&corpus, filter(&d.files), filter(&d.categories))?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    };
    Ok(())
}
