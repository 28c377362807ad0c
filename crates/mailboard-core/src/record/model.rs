//! Record data models and the classification lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Well-known category labels offered by the dashboard.
///
/// `Record::category` stays free text; these are the labels the dashboard
/// enumerates for classification and per-category statistics.
pub const CATEGORIES: [&str; 7] = [
    "Trabalho",
    "Pessoal",
    "Financeiro",
    "Suporte",
    "Marketing",
    "Compras",
    "Outros",
];

/// Lifecycle state of a record under triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Waiting for classification - the initial state.
    #[default]
    Pending,
    /// Category and priority have been committed.
    Classified,
    /// Filed away; leaves this state only through reclassification.
    Archived,
}

impl Status {
    /// Every lifecycle state.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Classified, Self::Archived];

    /// Parse from the wire/storage string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "classified" => Some(Self::Classified),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }

    /// Convert to the wire/storage string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Classified => "classified",
            Self::Archived => "archived",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Classified => "Classificado",
            Self::Archived => "Arquivado",
        }
    }
}

/// Urgency level of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default level.
    #[default]
    Medium,
    /// Needs attention soon.
    High,
    /// Needs attention now.
    Urgent,
}

impl Priority {
    /// Every priority level, lowest first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Parse from the wire/storage string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    /// Convert to the wire/storage string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "Baixa",
            Self::Medium => "Média",
            Self::High => "Alta",
            Self::Urgent => "Urgente",
        }
    }
}

impl std::str::FromStr for Status {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s).unwrap_or_default())
    }
}

impl std::str::FromStr for Priority {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s).unwrap_or_default())
    }
}

/// Two-letter administrative region (Brazilian federative unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Acre.
    #[serde(rename = "AC")]
    Acre,
    /// Alagoas.
    #[serde(rename = "AL")]
    Alagoas,
    /// Amapá.
    #[serde(rename = "AP")]
    Amapa,
    /// Amazonas.
    #[serde(rename = "AM")]
    Amazonas,
    /// Bahia.
    #[serde(rename = "BA")]
    Bahia,
    /// Ceará.
    #[serde(rename = "CE")]
    Ceara,
    /// Distrito Federal.
    #[serde(rename = "DF")]
    DistritoFederal,
    /// Espírito Santo.
    #[serde(rename = "ES")]
    EspiritoSanto,
    /// Goiás.
    #[serde(rename = "GO")]
    Goias,
    /// Maranhão.
    #[serde(rename = "MA")]
    Maranhao,
    /// Mato Grosso.
    #[serde(rename = "MT")]
    MatoGrosso,
    /// Mato Grosso do Sul.
    #[serde(rename = "MS")]
    MatoGrossoDoSul,
    /// Minas Gerais.
    #[serde(rename = "MG")]
    MinasGerais,
    /// Pará.
    #[serde(rename = "PA")]
    Para,
    /// Paraíba.
    #[serde(rename = "PB")]
    Paraiba,
    /// Paraná.
    #[serde(rename = "PR")]
    Parana,
    /// Pernambuco.
    #[serde(rename = "PE")]
    Pernambuco,
    /// Piauí.
    #[serde(rename = "PI")]
    Piaui,
    /// Rio de Janeiro.
    #[serde(rename = "RJ")]
    RioDeJaneiro,
    /// Rio Grande do Norte.
    #[serde(rename = "RN")]
    RioGrandeDoNorte,
    /// Rio Grande do Sul.
    #[serde(rename = "RS")]
    RioGrandeDoSul,
    /// Rondônia.
    #[serde(rename = "RO")]
    Rondonia,
    /// Roraima.
    #[serde(rename = "RR")]
    Roraima,
    /// Santa Catarina.
    #[serde(rename = "SC")]
    SantaCatarina,
    /// São Paulo.
    #[serde(rename = "SP")]
    SaoPaulo,
    /// Sergipe.
    #[serde(rename = "SE")]
    Sergipe,
    /// Tocantins.
    #[serde(rename = "TO")]
    Tocantins,
}

impl Region {
    /// Every region, in display order.
    pub const ALL: [Self; 27] = [
        Self::Acre,
        Self::Alagoas,
        Self::Amapa,
        Self::Amazonas,
        Self::Bahia,
        Self::Ceara,
        Self::DistritoFederal,
        Self::EspiritoSanto,
        Self::Goias,
        Self::Maranhao,
        Self::MatoGrosso,
        Self::MatoGrossoDoSul,
        Self::MinasGerais,
        Self::Para,
        Self::Paraiba,
        Self::Parana,
        Self::Pernambuco,
        Self::Piaui,
        Self::RioDeJaneiro,
        Self::RioGrandeDoNorte,
        Self::RioGrandeDoSul,
        Self::Rondonia,
        Self::Roraima,
        Self::SantaCatarina,
        Self::SaoPaulo,
        Self::Sergipe,
        Self::Tocantins,
    ];

    /// Parse a two-letter code (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "AC" => Some(Self::Acre),
            "AL" => Some(Self::Alagoas),
            "AP" => Some(Self::Amapa),
            "AM" => Some(Self::Amazonas),
            "BA" => Some(Self::Bahia),
            "CE" => Some(Self::Ceara),
            "DF" => Some(Self::DistritoFederal),
            "ES" => Some(Self::EspiritoSanto),
            "GO" => Some(Self::Goias),
            "MA" => Some(Self::Maranhao),
            "MT" => Some(Self::MatoGrosso),
            "MS" => Some(Self::MatoGrossoDoSul),
            "MG" => Some(Self::MinasGerais),
            "PA" => Some(Self::Para),
            "PB" => Some(Self::Paraiba),
            "PR" => Some(Self::Parana),
            "PE" => Some(Self::Pernambuco),
            "PI" => Some(Self::Piaui),
            "RJ" => Some(Self::RioDeJaneiro),
            "RN" => Some(Self::RioGrandeDoNorte),
            "RS" => Some(Self::RioGrandeDoSul),
            "RO" => Some(Self::Rondonia),
            "RR" => Some(Self::Roraima),
            "SC" => Some(Self::SantaCatarina),
            "SP" => Some(Self::SaoPaulo),
            "SE" => Some(Self::Sergipe),
            "TO" => Some(Self::Tocantins),
            _ => None,
        }
    }

    /// The two-letter code used on the wire and in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Acre => "AC",
            Self::Alagoas => "AL",
            Self::Amapa => "AP",
            Self::Amazonas => "AM",
            Self::Bahia => "BA",
            Self::Ceara => "CE",
            Self::DistritoFederal => "DF",
            Self::EspiritoSanto => "ES",
            Self::Goias => "GO",
            Self::Maranhao => "MA",
            Self::MatoGrosso => "MT",
            Self::MatoGrossoDoSul => "MS",
            Self::MinasGerais => "MG",
            Self::Para => "PA",
            Self::Paraiba => "PB",
            Self::Parana => "PR",
            Self::Pernambuco => "PE",
            Self::Piaui => "PI",
            Self::RioDeJaneiro => "RJ",
            Self::RioGrandeDoNorte => "RN",
            Self::RioGrandeDoSul => "RS",
            Self::Rondonia => "RO",
            Self::Roraima => "RR",
            Self::SantaCatarina => "SC",
            Self::SaoPaulo => "SP",
            Self::Sergipe => "SE",
            Self::Tocantins => "TO",
        }
    }

    /// Full name of the region.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Acre => "Acre",
            Self::Alagoas => "Alagoas",
            Self::Amapa => "Amapá",
            Self::Amazonas => "Amazonas",
            Self::Bahia => "Bahia",
            Self::Ceara => "Ceará",
            Self::DistritoFederal => "Distrito Federal",
            Self::EspiritoSanto => "Espírito Santo",
            Self::Goias => "Goiás",
            Self::Maranhao => "Maranhão",
            Self::MatoGrosso => "Mato Grosso",
            Self::MatoGrossoDoSul => "Mato Grosso do Sul",
            Self::MinasGerais => "Minas Gerais",
            Self::Para => "Pará",
            Self::Paraiba => "Paraíba",
            Self::Parana => "Paraná",
            Self::Pernambuco => "Pernambuco",
            Self::Piaui => "Piauí",
            Self::RioDeJaneiro => "Rio de Janeiro",
            Self::RioGrandeDoNorte => "Rio Grande do Norte",
            Self::RioGrandeDoSul => "Rio Grande do Sul",
            Self::Rondonia => "Rondônia",
            Self::Roraima => "Roraima",
            Self::SantaCatarina => "Santa Catarina",
            Self::SaoPaulo => "São Paulo",
            Self::Sergipe => "Sergipe",
            Self::Tocantins => "Tocantins",
        }
    }
}

/// An email-like record under triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Subject line.
    pub subject: String,
    /// Sender address.
    pub sender: String,
    /// Recipient address.
    pub recipient: String,
    /// Body text.
    pub content: String,
    /// Lifecycle state.
    pub status: Status,
    /// Urgency level.
    pub priority: Priority,
    /// Category label, present once classified (or left absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Administrative region. Required when created through the dashboard;
    /// records ingested from the external source may lack it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Municipality within the region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Creation timestamp. Never changes after creation.
    pub date: DateTime<Utc>,
    /// Free-text labels, possibly empty.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record {
    /// Check if the record is waiting for classification.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.status, Status::Pending)
    }

    /// Check if the record has been classified.
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        matches!(self.status, Status::Classified)
    }

    /// Check if the record has been archived.
    #[must_use]
    pub const fn is_archived(&self) -> bool {
        matches!(self.status, Status::Archived)
    }

    /// Commit a classification: store the category and priority and move to
    /// `Classified`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the record is `Pending`.
    pub fn classify(&mut self, category: impl Into<String>, priority: Priority) -> Result<()> {
        if self.status != Status::Pending {
            return Err(Error::InvalidTransition {
                from: self.status.as_str(),
                action: "classify",
            });
        }

        self.category = Some(category.into());
        self.priority = priority;
        self.status = Status::Classified;
        Ok(())
    }

    /// File the record away.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is already `Archived`.
    pub fn archive(&mut self) -> Result<()> {
        if self.status == Status::Archived {
            return Err(Error::InvalidTransition {
                from: self.status.as_str(),
                action: "archive",
            });
        }

        self.status = Status::Archived;
        Ok(())
    }

    /// Reopen a classified or archived record for triage.
    ///
    /// Clears the category and resets the priority to `Medium` regardless of
    /// their prior values.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is still `Pending`.
    pub fn reclassify(&mut self) -> Result<()> {
        if self.status == Status::Pending {
            return Err(Error::InvalidTransition {
                from: self.status.as_str(),
                action: "reclassify",
            });
        }

        self.status = Status::Pending;
        self.category = None;
        self.priority = Priority::Medium;
        Ok(())
    }

    /// Shallow-merge a patch into this record.
    ///
    /// Unset patch fields leave the record untouched; `id` and `date` are
    /// never patched. A patch cannot clear `category` - only reclassification
    /// does that.
    pub fn apply_patch(&mut self, patch: RecordPatch) {
        if let Some(subject) = patch.subject {
            self.subject = subject;
        }
        if let Some(sender) = patch.sender {
            self.sender = sender;
        }
        if let Some(recipient) = patch.recipient {
            self.recipient = recipient;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(region) = patch.region {
            self.region = Some(region);
        }
        if let Some(city) = patch.city {
            self.city = Some(city);
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    /// Check if the record matches a free-text query.
    ///
    /// Case-insensitive substring match against subject, sender, content,
    /// recipient, and city; a hit on any one field suffices. Absent fields
    /// simply never match.
    #[must_use]
    pub fn matches_text(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.subject.to_lowercase().contains(&query_lower)
            || self.sender.to_lowercase().contains(&query_lower)
            || self.content.to_lowercase().contains(&query_lower)
            || self.recipient.to_lowercase().contains(&query_lower)
            || self
                .city
                .as_ref()
                .is_some_and(|city| city.to_lowercase().contains(&query_lower))
    }
}

/// Input for creating a record through the store.
#[derive(Debug, Clone)]
pub struct NewRecord {
    /// Subject line.
    pub subject: String,
    /// Sender address.
    pub sender: String,
    /// Recipient address.
    pub recipient: String,
    /// Body text.
    pub content: String,
    /// Administrative region, required at creation.
    pub region: Region,
    /// Municipality within the region.
    pub city: Option<String>,
    /// Initial lifecycle state.
    pub status: Status,
    /// Initial urgency level.
    pub priority: Priority,
    /// Category label.
    pub category: Option<String>,
    /// Free-text labels.
    pub tags: Vec<String>,
}

impl NewRecord {
    /// Creates a new record input with default status (`Pending`) and
    /// priority (`Medium`).
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        sender: impl Into<String>,
        content: impl Into<String>,
        region: Region,
    ) -> Self {
        Self {
            subject: subject.into(),
            sender: sender.into(),
            recipient: String::new(),
            content: content.into(),
            region,
            city: None,
            status: Status::Pending,
            priority: Priority::Medium,
            category: None,
            tags: Vec::new(),
        }
    }

    /// Sets the recipient.
    #[must_use]
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the initial priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub(crate) fn into_record(self, id: String, date: DateTime<Utc>) -> Record {
        Record {
            id,
            subject: self.subject,
            sender: self.sender,
            recipient: self.recipient,
            content: self.content,
            status: self.status,
            priority: self.priority,
            category: self.category,
            region: Some(self.region),
            city: self.city,
            date,
            tags: self.tags,
        }
    }
}

/// Shallow-merge update for a record.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    /// New subject line.
    pub subject: Option<String>,
    /// New sender address.
    pub sender: Option<String>,
    /// New recipient address.
    pub recipient: Option<String>,
    /// New body text.
    pub content: Option<String>,
    /// New lifecycle state.
    pub status: Option<Status>,
    /// New urgency level.
    pub priority: Option<Priority>,
    /// New category label.
    pub category: Option<String>,
    /// New administrative region.
    pub region: Option<Region>,
    /// New municipality.
    pub city: Option<String>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            id: "email-1".to_string(),
            subject: "Assunto do E-mail 1".to_string(),
            sender: "joao@empresa.com".to_string(),
            recipient: "voce@empresa.com".to_string(),
            content: "Este é o conteúdo do e-mail 1.".to_string(),
            status: Status::Pending,
            priority: Priority::Medium,
            category: None,
            region: Some(Region::SaoPaulo),
            city: Some("Campinas".to_string()),
            date: Utc::now(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_status_roundtrip() {
        for status in Status::ALL {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_priority_roundtrip() {
        for priority in Priority::ALL {
            assert_eq!(Priority::parse(priority.as_str()), Some(priority));
        }
    }

    #[test]
    fn test_from_str_falls_back_to_default() {
        assert_eq!("urgent".parse::<Priority>().unwrap(), Priority::Urgent);
        assert_eq!("???".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("???".parse::<Status>().unwrap(), Status::Pending);
    }

    #[test]
    fn test_region_roundtrip() {
        for region in Region::ALL {
            assert_eq!(Region::parse(region.as_str()), Some(region));
        }
    }

    #[test]
    fn test_region_parse_case_insensitive() {
        assert_eq!(Region::parse("sp"), Some(Region::SaoPaulo));
        assert_eq!(Region::parse(" rj "), Some(Region::RioDeJaneiro));
    }

    #[test]
    fn test_region_parse_unknown() {
        assert_eq!(Region::parse("XX"), None);
        assert_eq!(Region::parse(""), None);
    }

    #[test]
    fn test_region_display_names() {
        assert_eq!(Region::SaoPaulo.display_name(), "São Paulo");
        assert_eq!(Region::DistritoFederal.display_name(), "Distrito Federal");
        assert_eq!(Region::ALL.len(), 27);
    }

    #[test]
    fn test_classify_pending() {
        let mut record = sample_record();

        record.classify("Trabalho", Priority::High).unwrap();

        assert!(record.is_classified());
        assert_eq!(record.category.as_deref(), Some("Trabalho"));
        assert_eq!(record.priority, Priority::High);
    }

    #[test]
    fn test_classify_rejected_when_already_classified() {
        let mut record = sample_record();
        record.classify("Trabalho", Priority::High).unwrap();

        let err = record.classify("Pessoal", Priority::Low).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { .. }));
    }

    #[test]
    fn test_archive_from_pending_and_classified() {
        let mut pending = sample_record();
        pending.archive().unwrap();
        assert!(pending.is_archived());

        let mut classified = sample_record();
        classified.classify("Suporte", Priority::Medium).unwrap();
        classified.archive().unwrap();
        assert!(classified.is_archived());
    }

    #[test]
    fn test_archive_rejected_when_archived() {
        let mut record = sample_record();
        record.archive().unwrap();

        assert!(record.archive().is_err());
    }

    #[test]
    fn test_reclassify_clears_category_and_resets_priority() {
        let mut record = sample_record();
        record.classify("Financeiro", Priority::Urgent).unwrap();

        record.reclassify().unwrap();

        assert!(record.is_pending());
        assert_eq!(record.category, None);
        assert_eq!(record.priority, Priority::Medium);
    }

    #[test]
    fn test_reclassify_from_archived() {
        let mut record = sample_record();
        record.archive().unwrap();

        record.reclassify().unwrap();

        assert!(record.is_pending());
    }

    #[test]
    fn test_reclassify_rejected_when_pending() {
        let mut record = sample_record();

        assert!(record.reclassify().is_err());
    }

    #[test]
    fn test_apply_patch_merges() {
        let mut record = sample_record();

        record.apply_patch(RecordPatch {
            subject: Some("Atualizado".to_string()),
            priority: Some(Priority::Urgent),
            ..RecordPatch::default()
        });

        assert_eq!(record.subject, "Atualizado");
        assert_eq!(record.priority, Priority::Urgent);
        // Untouched fields survive
        assert_eq!(record.sender, "joao@empresa.com");
        assert_eq!(record.status, Status::Pending);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut record = sample_record();
        let before = record.clone();

        record.apply_patch(RecordPatch::default());

        assert_eq!(record, before);
    }

    #[test]
    fn test_matches_text() {
        let record = sample_record();

        assert!(record.matches_text("assunto"));
        assert!(record.matches_text("JOAO"));
        assert!(record.matches_text("conteúdo"));
        assert!(record.matches_text("voce@"));
        assert!(record.matches_text("campinas"));
        assert!(!record.matches_text("nada disso"));
    }

    #[test]
    fn test_matches_text_without_city() {
        let mut record = sample_record();
        record.city = None;

        assert!(!record.matches_text("campinas"));
    }

    #[test]
    fn test_new_record_defaults() {
        let new = NewRecord::new("A", "x@y.com", "c", Region::SaoPaulo);

        assert_eq!(new.status, Status::Pending);
        assert_eq!(new.priority, Priority::Medium);
        assert!(new.recipient.is_empty());
        assert!(new.category.is_none());
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = sample_record();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
        // Absent optional fields are omitted from the payload
        assert!(!json.contains("\"category\""));
        assert!(json.contains("\"region\":\"SP\""));
    }
}
