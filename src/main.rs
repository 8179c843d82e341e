use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Value, json};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rusty_golf_matchplay::args::{self, Command, Settings};
use rusty_golf_matchplay::controller::badges::{VsAllEntrant, vs_all};
use rusty_golf_matchplay::controller::{record_hole, rescore_document, rescore_match};
use rusty_golf_matchplay::handicap::{course_handicap_lenient, setup_match};
use rusty_golf_matchplay::model::{Course, encode_match_document};
use rusty_golf_matchplay::storage::{MatchStore, SqliteStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = args::args_checks();
    let settings = args::load_settings(&args)?;
    run(args.command, &settings)
}

fn open_store(settings: &Settings) -> Result<SqliteStore> {
    SqliteStore::open(&settings.db)
        .with_context(|| format!("open match store {}", settings.db.display()))
}

fn parse_course(value: Value) -> Result<Course> {
    serde_json::from_value(value).context("parse course json")
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Summarize { mut file } => {
            let (status, result) = rescore_document(&mut file, &settings.badges)?;
            println!("{}", status.describe());
            print_json(&json!({ "status": status, "result": result, "badges": file.get("badges") }))
        }
        Command::Import { match_id, mut file } => {
            let mut store = open_store(settings)?;
            let (status, _) = rescore_document(&mut file, &settings.badges)?;
            store.put_match(&match_id, &file)?;
            info!(match_id = %match_id, "imported match");
            println!("{match_id}: {}", status.describe());
            Ok(())
        }
        Command::Rescore { match_id, all } => {
            let mut store = open_store(settings)?;
            let ids = if all {
                store.match_ids()?
            } else {
                vec![match_id.ok_or_else(|| anyhow!("missing --match-id"))?]
            };
            for id in ids {
                match rescore_match(&mut store, &id, &settings.badges) {
                    Ok((status, _)) => println!("{id}: {}", status.describe()),
                    Err(e) if all => warn!(match_id = %id, error = %e, "skipping match"),
                    Err(e) => return Err(e.into()),
                }
            }
            Ok(())
        }
        Command::Hole {
            match_id,
            hole,
            input,
            clear,
        } => {
            let input = match (input, clear) {
                (_, true) => None,
                (Some(text), false) => {
                    Some(serde_json::from_str::<Value>(&text).context("parse hole input json")?)
                }
                (None, false) => bail!("missing --input"),
            };
            let mut store = open_store(settings)?;
            let (status, result) =
                record_hole(&mut store, &match_id, hole, input.as_ref(), &settings.badges)?;
            println!("{match_id}: {}", status.describe());
            print_json(&json!({ "status": status, "result": result }))
        }
        Command::Show { match_id } => {
            let store = open_store(settings)?;
            let doc = store
                .get_match(&match_id)?
                .ok_or_else(|| anyhow!("match {match_id} not found"))?;
            print_json(&doc)
        }
        Command::Setup {
            format,
            course,
            team_a,
            team_b,
            match_id,
        } => {
            let course = parse_course(course)?;
            if let Err(e) = course.validate() {
                warn!(course = %course.name, error = %e, "course failed validation");
            }
            let data = setup_match(format, &team_a, &team_b, &course);
            let mut doc = encode_match_document(format, &data);
            if let Some(obj) = doc.as_object_mut() {
                obj.insert("course".to_string(), serde_json::to_value(&course)?);
            }
            rescore_document(&mut doc, &settings.badges)?;
            match match_id {
                Some(id) => {
                    let mut store = open_store(settings)?;
                    store.put_match(&id, &doc)?;
                    info!(match_id = %id, format = %format, "created match");
                    println!("{id}: created");
                    Ok(())
                }
                None => print_json(&doc),
            }
        }
        Command::Handicap {
            index,
            slope,
            rating,
            par,
        } => {
            let to_value = |s: Option<String>| s.map(Value::String);
            let handicap = course_handicap_lenient(
                &Value::String(index),
                to_value(slope).as_ref(),
                to_value(rating).as_ref(),
                to_value(par).as_ref(),
            );
            println!("{handicap}");
            Ok(())
        }
        Command::VsAll {
            format,
            course,
            entrants,
        } => {
            let course = parse_course(course)?;
            let entrants: Vec<VsAllEntrant> =
                serde_json::from_value(entrants).context("parse entrants json")?;
            let records = vs_all(format, &entrants, &course);
            print_json(&serde_json::to_value(&records)?)
        }
        Command::ValidateCourse { file } => {
            let course = parse_course(file)?;
            course
                .validate()
                .with_context(|| format!("course '{}'", course.name))?;
            println!("{}: ok, par {}", course.name, course.par());
            Ok(())
        }
    }
}
