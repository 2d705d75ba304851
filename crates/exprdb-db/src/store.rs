//! Generic row access over the libSQL connection.
//!
//! Three primitives back every repository method: lookup by primary key,
//! lookup by a conjunction of equality / membership constraints, and insert.
//! Entities describe how they are stored by implementing [`Record`].

use libsql::Value;

use crate::ExprDb;
use crate::error::DatabaseError;

/// Every table the store knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Genomes,
    Datasets,
    Annotations,
    Samples,
    Genes,
    Transcripts,
    CufflinksGenes,
    CufflinksTranscripts,
    ExternalDbs,
    ExpressionLinks,
    FeatureXrefs,
    AlignFeatures,
}

impl Table {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Genomes => "genomes",
            Self::Datasets => "datasets",
            Self::Annotations => "annotations",
            Self::Samples => "samples",
            Self::Genes => "genes",
            Self::Transcripts => "transcripts",
            Self::CufflinksGenes => "cufflinks_genes",
            Self::CufflinksTranscripts => "cufflinks_transcripts",
            Self::ExternalDbs => "external_dbs",
            Self::ExpressionLinks => "xref_samples",
            Self::FeatureXrefs => "xref_features",
            Self::AlignFeatures => "align_features",
        }
    }
}

/// A typed entity stored in one table.
pub trait Record: Sized {
    const TABLE: Table;

    /// Select list, in the column order `from_row` reads.
    const COLUMNS: &'static str;

    /// Build the entity from a row selected with [`Self::COLUMNS`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or holds an invalid value.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;
}

#[derive(Debug, Clone)]
enum Clause {
    Eq(&'static str, Value),
    In(&'static str, Vec<Value>),
}

/// Conjunction of `column = value` and `column IN (...)` constraints.
///
/// An empty filter matches every row. An `IN` over an empty set matches none.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<Clause>,
}

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn eq(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.clauses.push(Clause::Eq(column, value.into()));
        self
    }

    #[must_use]
    pub fn is_in<V, I>(mut self, column: &'static str, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        self.clauses
            .push(Clause::In(column, values.into_iter().map(Into::into).collect()));
        self
    }

    /// Render as a `WHERE` clause with `?N` placeholders, plus the bound values.
    fn to_sql(&self) -> (String, Vec<Value>) {
        if self.clauses.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut parts = Vec::with_capacity(self.clauses.len());
        let mut params = Vec::new();
        for clause in &self.clauses {
            match clause {
                Clause::Eq(column, value) => {
                    params.push(value.clone());
                    parts.push(format!("{column} = ?{}", params.len()));
                }
                Clause::In(_, values) if values.is_empty() => parts.push("0".to_string()),
                Clause::In(column, values) => {
                    let mut slots = Vec::with_capacity(values.len());
                    for value in values {
                        params.push(value.clone());
                        slots.push(format!("?{}", params.len()));
                    }
                    parts.push(format!("{column} IN ({})", slots.join(", ")));
                }
            }
        }
        (format!(" WHERE {}", parts.join(" AND ")), params)
    }
}

impl ExprDb {
    /// Load one row by primary key. Absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be parsed.
    pub async fn find_by_id<T: Record>(&self, id: i64) -> Result<Option<T>, DatabaseError> {
        self.find_one(&Filter::new().eq("id", id)).await
    }

    /// Load the first row matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be parsed.
    pub async fn find_one<T: Record>(&self, filter: &Filter) -> Result<Option<T>, DatabaseError> {
        let (where_sql, params) = filter.to_sql();
        let sql = format!(
            "SELECT {} FROM {}{where_sql} LIMIT 1",
            T::COLUMNS,
            T::TABLE.name()
        );
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(T::from_row(&row)?)),
            None => Ok(None),
        }
    }

    /// Load every row matching `filter`, optionally ordered by `order_by`.
    ///
    /// Without `order_by` rows come back in store order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or any row cannot be parsed.
    pub async fn find_where<T: Record>(
        &self,
        filter: &Filter,
        order_by: Option<&str>,
    ) -> Result<Vec<T>, DatabaseError> {
        let (where_sql, params) = filter.to_sql();
        let order_sql = order_by.map(|o| format!(" ORDER BY {o}")).unwrap_or_default();
        let sql = format!(
            "SELECT {} FROM {}{where_sql}{order_sql}",
            T::COLUMNS,
            T::TABLE.name()
        );
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(T::from_row(&row)?);
        }
        Ok(records)
    }

    /// Insert one row and return its new primary key.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert violates a constraint or fails.
    pub async fn insert(
        &self,
        table: Table,
        columns: &[&str],
        values: Vec<Value>,
    ) -> Result<i64, DatabaseError> {
        if columns.len() != values.len() {
            return Err(DatabaseError::Query(format!(
                "insert into {}: {} columns but {} values",
                table.name(),
                columns.len(),
                values.len()
            )));
        }

        let slots: Vec<String> = (1..=values.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
            table.name(),
            columns.join(", "),
            slots.join(", ")
        );
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(values))
            .await?;
        let row = rows.next().await?.ok_or_else(|| {
            DatabaseError::Query(format!("insert into {} returned no id", table.name()))
        })?;
        Ok(row.get::<i64>(0)?)
    }
}
