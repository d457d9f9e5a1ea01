//! Typed movie records and the fixed column schema.

use serde::{Deserialize, Serialize};

/// The fourteen required columns, in canonical order.
pub const EXPECTED_COLUMNS: [&str; 14] = [
    "url",
    "title",
    "ratingValue",
    "ratingCount",
    "year",
    "description",
    "budget",
    "gross",
    "duration",
    "genreList",
    "countryList",
    "castList",
    "characterList",
    "directorList",
];

/// Columns coerced to nullable numbers, in coercion order.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    "duration",
    "gross",
    "budget",
    "ratingValue",
    "ratingCount",
    "year",
];

/// Columns holding ordered lists of strings.
pub const LIST_COLUMNS: [&str; 5] = [
    "genreList",
    "countryList",
    "castList",
    "characterList",
    "directorList",
];

/// One normalized row of the movie table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    /// Source page of the movie.
    pub url: Option<String>,
    /// Display title; also the identity used for distinct-movie counts.
    pub title: Option<String>,
    /// Average user rating.
    pub rating_value: Option<f64>,
    /// Number of ratings behind `rating_value`.
    pub rating_count: Option<f64>,
    /// Release year.
    pub year: Option<f64>,
    /// Free-text synopsis.
    pub description: Option<String>,
    /// Production budget.
    pub budget: Option<f64>,
    /// Box-office gross.
    pub gross: Option<f64>,
    /// Running time in minutes.
    pub duration: Option<f64>,
    /// Genres, in source order.
    pub genre_list: Vec<String>,
    /// Production countries, in source order.
    pub country_list: Vec<String>,
    /// Cast members, in billing order.
    pub cast_list: Vec<String>,
    /// Character names, aligned with the cast when the source provides them.
    pub character_list: Vec<String>,
    /// Directors.
    pub director_list: Vec<String>,
}

/// The list-valued columns, each of which can be exploded into entity rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListColumn {
    /// `genreList`.
    GenreList,
    /// `countryList`.
    CountryList,
    /// `castList`.
    CastList,
    /// `characterList`.
    CharacterList,
    /// `directorList`.
    DirectorList,
}

impl ListColumn {
    /// All list columns, in canonical order.
    pub const ALL: [ListColumn; 5] = [
        ListColumn::GenreList,
        ListColumn::CountryList,
        ListColumn::CastList,
        ListColumn::CharacterList,
        ListColumn::DirectorList,
    ];

    /// Source column name.
    pub fn column_name(self) -> &'static str {
        match self {
            ListColumn::GenreList => "genreList",
            ListColumn::CountryList => "countryList",
            ListColumn::CastList => "castList",
            ListColumn::CharacterList => "characterList",
            ListColumn::DirectorList => "directorList",
        }
    }

    /// Singular field name the column takes once exploded.
    pub fn entity_field(self) -> &'static str {
        match self {
            ListColumn::GenreList => "genre",
            ListColumn::CountryList => "country",
            ListColumn::CastList => "actor",
            ListColumn::CharacterList => "character",
            ListColumn::DirectorList => "director",
        }
    }

    /// Looks a list column up by its source name.
    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.column_name() == name)
    }

    /// Borrows this column's values from a record.
    pub fn values(self, record: &MovieRecord) -> &[String] {
        match self {
            ListColumn::GenreList => &record.genre_list,
            ListColumn::CountryList => &record.country_list,
            ListColumn::CastList => &record.cast_list,
            ListColumn::CharacterList => &record.character_list,
            ListColumn::DirectorList => &record.director_list,
        }
    }

    /// Mutable access used while coercing a record.
    pub fn values_mut(self, record: &mut MovieRecord) -> &mut Vec<String> {
        match self {
            ListColumn::GenreList => &mut record.genre_list,
            ListColumn::CountryList => &mut record.country_list,
            ListColumn::CastList => &mut record.cast_list,
            ListColumn::CharacterList => &mut record.character_list,
            ListColumn::DirectorList => &mut record.director_list,
        }
    }
}

/// Normalized movie table sharing the [`EXPECTED_COLUMNS`] schema.
///
/// Derived views borrow from a `Table` and never mutate it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    records: Vec<MovieRecord>,
}

impl Table {
    /// Wraps already normalized records.
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// Column names of every table, in canonical order.
    pub fn columns(&self) -> &'static [&'static str] {
        &EXPECTED_COLUMNS
    }

    /// Borrows the records in source order.
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Iterates records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the table returning its records.
    pub fn into_records(self) -> Vec<MovieRecord> {
        self.records
    }
}

impl From<Vec<MovieRecord>> for Table {
    fn from(records: Vec<MovieRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a MovieRecord;
    type IntoIter = std::slice::Iter<'a, MovieRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
