use chrono::NaiveDate;
use peoplebook_core::{
    sort_persons, CountryAddRequest, CountryService, FixedClock, Gender, InMemoryCountryRepository,
    InMemoryPersonRepository, PersonAddRequest, PersonResponse, PersonSearchField, PersonService,
    PersonSortField, SortOrder,
};

type Countries = CountryService<InMemoryCountryRepository>;
type Persons<'a> = PersonService<InMemoryPersonRepository, &'a Countries>;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn countries() -> Countries {
    let countries = CountryService::new(InMemoryCountryRepository::new());
    for name in ["Nigeria", "Monaco", "UAE"] {
        countries
            .add_country(Some(&CountryAddRequest::new(name)))
            .unwrap();
    }
    countries
}

fn country_id(countries: &Countries, name: &str) -> Option<uuid::Uuid> {
    countries
        .get_all_countries()
        .into_iter()
        .find(|country| country.country_name == name)
        .map(|country| country.country_id)
}

/// Seeds the four fixture persons used across search/sort tests.
fn seeded(countries: &Countries) -> Persons<'_> {
    let persons = PersonService::with_clock(
        InMemoryPersonRepository::new(),
        countries,
        FixedClock(date(2024, 1, 1)),
    );
    let fixtures = [
        (
            "KING Hussein",
            "king@hussein.com",
            Some(date(1860, 1, 1)),
            Some(Gender::Male),
            "Nigeria",
            Some("12 Palace Road"),
            Some(true),
        ),
        (
            "Prince Wahab",
            "prince@wahab.com",
            Some(date(1995, 3, 20)),
            Some(Gender::Male),
            "Monaco",
            Some("7 Harbour Street"),
            Some(false),
        ),
        (
            "Duke Malik",
            "duke@malik.com",
            Some(date(1980, 7, 4)),
            Some(Gender::Female),
            "UAE",
            None,
            None,
        ),
        (
            "Duke Lanre",
            "duke@lanre.com",
            None,
            None,
            "Nowhere",
            Some("3 Palace Close"),
            Some(true),
        ),
    ];

    for (name, email, date_of_birth, gender, country, address, news) in fixtures {
        let request = PersonAddRequest {
            person_name: Some(name.to_string()),
            email: Some(email.to_string()),
            date_of_birth,
            gender,
            country_id: country_id(countries, country),
            address: address.map(str::to_string),
            receive_news_letter: news,
        };
        persons.add_person(Some(&request)).unwrap();
    }
    persons
}

fn names(persons: &[PersonResponse]) -> Vec<&str> {
    persons
        .iter()
        .map(|person| person.person_name.as_deref().unwrap_or(""))
        .collect()
}

#[test]
fn empty_or_absent_search_returns_everything() {
    let countries = countries();
    let persons = seeded(&countries);

    assert_eq!(persons.get_filtered_persons(Some("PersonName"), Some("")).len(), 4);
    assert_eq!(persons.get_filtered_persons(None, Some("in")).len(), 4);
    assert_eq!(persons.get_filtered_persons(Some("PersonName"), None).len(), 4);
    assert_eq!(persons.get_filtered_persons(Some(""), Some("in")).len(), 4);
}

#[test]
fn unknown_search_field_returns_everything() {
    let countries = countries();
    let persons = seeded(&countries);

    let result = persons.get_filtered_persons(Some("ShoeSize"), Some("42"));
    assert_eq!(result, persons.get_all_persons());
}

#[test]
fn name_search_is_case_insensitive_substring() {
    let countries = countries();
    let persons = seeded(&countries);

    let result = persons.get_filtered_persons(Some("PersonName"), Some("in"));
    assert_eq!(names(&result), vec!["KING Hussein", "Prince Wahab"]);

    let alias = persons.get_filtered_persons(Some("Name"), Some("IN"));
    assert_eq!(alias, result);
}

#[test]
fn email_search_matches_substring() {
    let countries = countries();
    let persons = seeded(&countries);

    let result = persons.search_persons(PersonSearchField::Email, "DUKE@");
    assert_eq!(names(&result), vec!["Duke Malik", "Duke Lanre"]);
}

#[test]
fn date_search_uses_long_month_format_and_keeps_absent_dates() {
    let countries = countries();
    let persons = seeded(&countries);

    let result = persons.get_filtered_persons(Some("DateOfBirth"), Some("01 january 1860"));
    assert_eq!(names(&result), vec!["KING Hussein", "Duke Lanre"]);

    let result = persons.get_filtered_persons(Some("DateOfBirth"), Some("march"));
    assert_eq!(names(&result), vec!["Prince Wahab", "Duke Lanre"]);
}

#[test]
fn gender_search_is_prefix_match() {
    let countries = countries();
    let persons = seeded(&countries);

    let result = persons.get_filtered_persons(Some("Gender"), Some("ma"));
    assert_eq!(
        names(&result),
        vec!["KING Hussein", "Prince Wahab", "Duke Lanre"]
    );

    let result = persons.get_filtered_persons(Some("Gender"), Some("ale"));
    assert_eq!(names(&result), vec!["Duke Lanre"]);
}

#[test]
fn country_search_matches_resolved_country_name() {
    let countries = countries();
    let persons = seeded(&countries);

    let result = persons.get_filtered_persons(Some("CountryId"), Some("nige"));
    assert_eq!(names(&result), vec!["KING Hussein", "Duke Lanre"]);
}

#[test]
fn address_search_keeps_persons_without_address() {
    let countries = countries();
    let persons = seeded(&countries);

    let result = persons.get_filtered_persons(Some("Address"), Some("palace"));
    assert_eq!(
        names(&result),
        vec!["KING Hussein", "Duke Malik", "Duke Lanre"]
    );
}

#[test]
fn sort_by_name_descending_ignores_case() {
    let countries = countries();
    let persons = seeded(&countries);
    let all = persons.get_all_persons();

    let sorted = persons.get_sorted_persons(&all, "PersonName", SortOrder::Desc);
    assert_eq!(
        names(&sorted),
        vec!["Prince Wahab", "KING Hussein", "Duke Malik", "Duke Lanre"]
    );

    let sorted = persons.get_sorted_persons(&all, "PersonName", SortOrder::Asc);
    assert_eq!(
        names(&sorted),
        vec!["Duke Lanre", "Duke Malik", "KING Hussein", "Prince Wahab"]
    );
}

#[test]
fn sort_leaves_input_untouched() {
    let countries = countries();
    let persons = seeded(&countries);
    let all = persons.get_all_persons();
    let snapshot = all.clone();

    let _ = persons.get_sorted_persons(&all, "Email", SortOrder::Asc);
    assert_eq!(all, snapshot);
}

#[test]
fn empty_or_unknown_sort_field_returns_input_unchanged() {
    let countries = countries();
    let persons = seeded(&countries);
    let all = persons.get_all_persons();

    assert_eq!(persons.get_sorted_persons(&all, "", SortOrder::Desc), all);
    assert_eq!(persons.get_sorted_persons(&all, "Height", SortOrder::Asc), all);
}

#[test]
fn sort_is_stable_for_equal_keys_in_both_directions() {
    let countries = countries();
    let persons = seeded(&countries);
    let all = persons.get_all_persons();

    let ascending = sort_persons(&all, PersonSortField::Gender, SortOrder::Asc);
    assert_eq!(
        names(&ascending),
        vec!["Duke Lanre", "Duke Malik", "KING Hussein", "Prince Wahab"]
    );

    let descending = sort_persons(&all, PersonSortField::Gender, SortOrder::Desc);
    assert_eq!(
        names(&descending),
        vec!["KING Hussein", "Prince Wahab", "Duke Malik", "Duke Lanre"]
    );
}

#[test]
fn sort_by_age_and_dates_uses_natural_order() {
    let countries = countries();
    let persons = seeded(&countries);
    let all = persons.get_all_persons();

    let by_age = persons.get_sorted_persons(&all, "Age", SortOrder::Desc);
    assert_eq!(
        names(&by_age),
        vec!["KING Hussein", "Duke Malik", "Prince Wahab", "Duke Lanre"]
    );

    let by_birth = persons.get_sorted_persons(&all, "DateOfBirth", SortOrder::Asc);
    assert_eq!(
        names(&by_birth),
        vec!["Duke Lanre", "KING Hussein", "Duke Malik", "Prince Wahab"]
    );
}

#[test]
fn sort_by_country_name_and_newsletter_flag() {
    let countries = countries();
    let persons = seeded(&countries);
    let all = persons.get_all_persons();

    let by_country = persons.get_sorted_persons(&all, "CountryName", SortOrder::Asc);
    assert_eq!(
        names(&by_country),
        vec!["Duke Lanre", "Prince Wahab", "KING Hussein", "Duke Malik"]
    );

    let by_flag = persons.get_sorted_persons(&all, "ReceiveNewsLetter", SortOrder::Desc);
    assert_eq!(
        names(&by_flag),
        vec!["KING Hussein", "Duke Lanre", "Prince Wahab", "Duke Malik"]
    );
}

#[test]
fn email_and_address_sorts_ignore_case_and_keep_ties_stable() {
    let countries = countries();
    let persons = PersonService::with_clock(
        InMemoryPersonRepository::new(),
        &countries,
        FixedClock(date(2024, 1, 1)),
    );
    for (name, email, address) in [
        ("Zed", "Zed@example.com", "apple lane"),
        ("Alpha", "alpha@example.com", "Birch Road"),
        ("Bravo", "BRAVO@example.com", "APPLE LANE"),
    ] {
        let request = PersonAddRequest {
            person_name: Some(name.to_string()),
            email: Some(email.to_string()),
            address: Some(address.to_string()),
            ..PersonAddRequest::default()
        };
        persons.add_person(Some(&request)).unwrap();
    }
    let all = persons.get_all_persons();

    let by_email = persons.get_sorted_persons(&all, "Email", SortOrder::Asc);
    assert_eq!(names(&by_email), vec!["Alpha", "Bravo", "Zed"]);
    let by_email = persons.get_sorted_persons(&all, "Email", SortOrder::Desc);
    assert_eq!(names(&by_email), vec!["Zed", "Bravo", "Alpha"]);

    let by_address = persons.get_sorted_persons(&all, "Address", SortOrder::Asc);
    assert_eq!(names(&by_address), vec!["Zed", "Bravo", "Alpha"]);
    let by_address = persons.get_sorted_persons(&all, "Address", SortOrder::Desc);
    assert_eq!(names(&by_address), vec!["Alpha", "Zed", "Bravo"]);
}
