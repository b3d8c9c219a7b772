//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire country and person services over in-memory stores.
//! - Print a deterministic filtered and sorted listing for sanity checks.

use chrono::NaiveDate;
use log::warn;
use peoplebook_core::{
    core_version, init_logging_from_env, CountryAddRequest, CountryService, Gender,
    InMemoryCountryRepository, InMemoryPersonRepository, PersonAddRequest, PersonService,
    ServiceResult, SortOrder,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging_from_env() {
        eprintln!("peoplebook logging disabled: {err}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("event=cli_run module=cli status=error error={err}");
            eprintln!("peoplebook error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ServiceResult<()> {
    println!("peoplebook_core version={}", core_version());

    let countries = CountryService::new(InMemoryCountryRepository::new());
    let persons = PersonService::new(InMemoryPersonRepository::new(), &countries);

    let nigeria = countries.add_country(Some(&CountryAddRequest::new("Nigeria")))?;
    let monaco = countries.add_country(Some(&CountryAddRequest::new("Monaco")))?;

    let seeds = [
        ("KING Hussein", "king@hussein.com", (1960, 1, 1), Gender::Male, nigeria.country_id),
        ("Prince Wahab", "prince@wahab.com", (1995, 3, 20), Gender::Male, monaco.country_id),
        ("Duke Malik", "duke@malik.com", (1980, 7, 4), Gender::Other, nigeria.country_id),
        ("Duke Lanre", "duke@lanre.com", (1972, 11, 9), Gender::Female, monaco.country_id),
    ];
    for (name, email, (year, month, day), gender, country_id) in seeds {
        persons.add_person(Some(&PersonAddRequest {
            person_name: Some(name.to_string()),
            email: Some(email.to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(year, month, day),
            gender: Some(gender),
            country_id: Some(country_id),
            address: None,
            receive_news_letter: Some(true),
        }))?;
    }

    let matches = persons.get_filtered_persons(Some("PersonName"), Some("in"));
    let sorted = persons.get_sorted_persons(&matches, "PersonName", SortOrder::Desc);
    println!("matches for PersonName~\"in\": {}", sorted.len());
    for person in &sorted {
        println!("{person}");
    }
    Ok(())
}
