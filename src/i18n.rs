//! Localised text for check results and reports.
//!
//! Every user-facing string the health battery produces comes from here, so
//! the scoring modules only deal in [`Advice`] and [`Reading`] values.

use crate::summary::Surface;
use crate::types::health::{CheckId, Status};
use crate::types::profile::StarRating;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" | "en-gb" => Some(Self::En),
            "pt" | "pt-br" => Some(Self::PtBr),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-BR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckText {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn check_text(locale: Locale, id: CheckId) -> CheckText {
    let (title, description) = match (locale, id) {
        (Locale::En, CheckId::FoundationDate) => (
            "Foundation date",
            "Tell your customers when your business was founded.",
        ),
        (Locale::PtBr, CheckId::FoundationDate) => (
            "Data de Fundação",
            "Informe aos seus clientes quando o seu negócio foi fundado.",
        ),
        (Locale::En, CheckId::UnansweredReviews) => (
            "Reviews - Unanswered reviews",
            "Your customers took the time to write a review. Replying shows how much you care.",
        ),
        (Locale::PtBr, CheckId::UnansweredReviews) => (
            "Avaliações - Avaliações Sem Resposta",
            "Os seus clientes investiram tempo escrevendo uma avaliação. Responder mostra o quanto você se importa.",
        ),
        (Locale::En, CheckId::VideoCount) => (
            "Media - Videos",
            "Videos attract and retain customers.",
        ),
        (Locale::PtBr, CheckId::VideoCount) => (
            "Mídia - Vídeos",
            "Vídeos atraem e fidelizam clientes.",
        ),
        (Locale::En, CheckId::LastMedia) => (
            "Last media by owner",
            "Publishing photos or videos regularly shows that your profile is active.",
        ),
        (Locale::PtBr, CheckId::LastMedia) => (
            "Data da Última Mídia pelo Proprietário",
            "Publicar periodicamente fotos ou vídeos demonstra que o seu perfil está ativo.",
        ),
        (Locale::En, CheckId::LastPost) => (
            "Last post date",
            "Creating and sharing updates shows that your business is active.",
        ),
        (Locale::PtBr, CheckId::LastPost) => (
            "Data da Última Postagem",
            "Criar e compartilhar novidades demonstra que o seu negócio é ativo.",
        ),
        (Locale::En, CheckId::ReviewTrend) => (
            "Reviews - Trend",
            "Compares recent reviews against the full review history.",
        ),
        (Locale::PtBr, CheckId::ReviewTrend) => (
            "Avaliações - Comparativo",
            "Analisa o histórico de avaliações recentes.",
        ),
        (Locale::En, CheckId::SpecialHours) => (
            "Special hours",
            "Set special opening hours for holidays.",
        ),
        (Locale::PtBr, CheckId::SpecialHours) => (
            "Horário Especial",
            "Importante definir horário especial para feriados.",
        ),
        (Locale::En, CheckId::Questions) => (
            "Questions and answers",
            "Answer direct questions from customers.",
        ),
        (Locale::PtBr, CheckId::Questions) => (
            "Perguntas e Respostas",
            "Responda a perguntas diretas de clientes.",
        ),
        (Locale::En, CheckId::BusinessName) => (
            "Business name",
            "The name should match the real-world name of the business.",
        ),
        (Locale::PtBr, CheckId::BusinessName) => (
            "Nome do Negócio",
            "O nome deve refletir o nome real do negócio.",
        ),
        (Locale::En, CheckId::PhoneNumber) => (
            "Phone number",
            "Key contact information for the business.",
        ),
        (Locale::PtBr, CheckId::PhoneNumber) => (
            "Número de Telefone",
            "Informação chave para o negócio.",
        ),
        (Locale::En, CheckId::Website) => ("Website", "Adds credibility and a way to get in touch."),
        (Locale::PtBr, CheckId::Website) => ("Website", "Dá credibilidade e contato."),
        (Locale::En, CheckId::Description) => ("Business description", "Tell your story."),
        (Locale::PtBr, CheckId::Description) => ("Descrição da Empresa", "Conte a sua história."),
    };
    CheckText { title, description }
}

/// Recommendation attached to a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    None,
    FoundationSet,
    FoundationMissing,
    ReviewReplies { total: usize, unanswered: usize },
    NoReviews,
    NoVideos { recommended: usize },
    NoMedia,
    MediaAge { days: i64, max_days: i64 },
    NoPosts,
    NoValidPosts,
    PostAge { days: i64, max_days: i64 },
    TrendStable,
    TrendDeclining,
    TrendInsufficient,
    SpecialHoursSet,
    SpecialHoursMissing,
    NoQuestions { recommended: usize },
    NameTooLong { max_chars: usize },
    PhoneSet,
    PhoneMissing,
    WebsiteSet,
    WebsiteMissing,
    DescriptionShort { min_chars: usize },
    DateUnavailable,
}

pub fn advice(locale: Locale, advice: Advice) -> String {
    match locale {
        Locale::En => advice_en(advice),
        Locale::PtBr => advice_pt_br(advice),
    }
}

fn advice_en(advice: Advice) -> String {
    match advice {
        Advice::None => String::new(),
        Advice::FoundationSet => "Foundation date is set.".to_string(),
        Advice::FoundationMissing => "The business has no foundation date yet.".to_string(),
        Advice::ReviewReplies { total, unanswered } => {
            format!("Total reviews: {total}. Unanswered: {unanswered}.")
        }
        Advice::NoReviews => "There are no reviews to answer.".to_string(),
        Advice::NoVideos { recommended } => {
            format!("The business has no videos. Recommended: {recommended}.")
        }
        Advice::NoMedia => "No media found.".to_string(),
        Advice::MediaAge { days, max_days } => format!(
            "Days since the last media: {days}. Recommended maximum: {max_days} days."
        ),
        Advice::NoPosts => "No posts found.".to_string(),
        Advice::NoValidPosts => "No valid posts found.".to_string(),
        Advice::PostAge { days, max_days } => format!(
            "Days since the last post: {days}. Recommended maximum: {max_days} days."
        ),
        Advice::TrendStable => "The average of recent reviews is stable or rising.".to_string(),
        Advice::TrendDeclining => {
            "The average of recent reviews is falling and may point to a problem.".to_string()
        }
        Advice::TrendInsufficient => "Not enough reviews to compute a trend.".to_string(),
        Advice::SpecialHoursSet => "Special hours are set.".to_string(),
        Advice::SpecialHoursMissing => "No special hours are set yet.".to_string(),
        Advice::NoQuestions { recommended } => {
            format!("There are no questions yet. Recommended: {recommended}.")
        }
        Advice::NameTooLong { max_chars } => {
            format!("Name is too long. Maximum: {max_chars} characters.")
        }
        Advice::PhoneSet => "Phone number is set.".to_string(),
        Advice::PhoneMissing => "Add a phone number.".to_string(),
        Advice::WebsiteSet => "Website is set.".to_string(),
        Advice::WebsiteMissing => "Add a website.".to_string(),
        Advice::DescriptionShort { min_chars } => {
            format!("Description is short or missing. Minimum: {min_chars} characters.")
        }
        Advice::DateUnavailable => "The creation date could not be read.".to_string(),
    }
}

fn advice_pt_br(advice: Advice) -> String {
    match advice {
        Advice::None => String::new(),
        Advice::FoundationSet => "Data de fundação definida.".to_string(),
        Advice::FoundationMissing => {
            "O negócio ainda não possui data de fundação adicionada.".to_string()
        }
        Advice::ReviewReplies { total, unanswered } => {
            format!("Total de avaliações: {total}. Sem resposta: {unanswered}.")
        }
        Advice::NoReviews => "Não há avaliações para responder.".to_string(),
        Advice::NoVideos { recommended } => {
            format!("Não existem vídeos para o negócio. Recomendado: {recommended}.")
        }
        Advice::NoMedia => "Nenhuma mídia encontrada.".to_string(),
        Advice::MediaAge { days, max_days } => format!(
            "Dias desde a última mídia: {days}. Máximo recomendado: {max_days} dias."
        ),
        Advice::NoPosts => "Nenhuma postagem encontrada.".to_string(),
        Advice::NoValidPosts => "Nenhuma postagem válida encontrada.".to_string(),
        Advice::PostAge { days, max_days } => format!(
            "Dias desde a última postagem: {days}. Máximo recomendado: {max_days} dias."
        ),
        Advice::TrendStable => "A média de avaliações recentes está estável ou subindo.".to_string(),
        Advice::TrendDeclining => {
            "A média de avaliações recentes está caindo e pode indicar um problema.".to_string()
        }
        Advice::TrendInsufficient => "Dados insuficientes para tendência.".to_string(),
        Advice::SpecialHoursSet => "Horário especial definido.".to_string(),
        Advice::SpecialHoursMissing => "Ainda não existe horário especial definido.".to_string(),
        Advice::NoQuestions { recommended } => {
            format!("Ainda não existem perguntas. Recomendado: {recommended}.")
        }
        Advice::NameTooLong { max_chars } => {
            format!("Nome muito longo. Máximo: {max_chars} caracteres.")
        }
        Advice::PhoneSet => "Telefone definido.".to_string(),
        Advice::PhoneMissing => "Adicione um telefone.".to_string(),
        Advice::WebsiteSet => "Website definido.".to_string(),
        Advice::WebsiteMissing => "Adicione um website.".to_string(),
        Advice::DescriptionShort { min_chars } => {
            format!("Descrição curta ou ausente. Mínimo {min_chars} caracteres.")
        }
        Advice::DateUnavailable => "Não foi possível ler a data de criação.".to_string(),
    }
}

/// Display value attached to a check result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    Date(String),
    Unanswered(usize),
    Count(usize),
    Days(i64),
    Chars(usize),
}

pub fn reading(locale: Locale, reading: &Reading) -> String {
    match (locale, reading) {
        (_, Reading::Date(date)) => date.clone(),
        (_, Reading::Count(count)) => count.to_string(),
        (_, Reading::Chars(chars)) => format!("{chars} chars"),
        (Locale::En, Reading::Unanswered(count)) => format!("{count} unanswered"),
        (Locale::PtBr, Reading::Unanswered(count)) => format!("{count} sem resposta"),
        (Locale::En, Reading::Days(days)) => format!("{days} days"),
        (Locale::PtBr, Reading::Days(days)) => format!("{days} dias"),
    }
}

pub fn status_label(locale: Locale, status: Status) -> &'static str {
    match (locale, status) {
        (Locale::En, Status::Weak) => "Weak",
        (Locale::En, Status::Reasonable) => "Reasonable",
        (Locale::En, Status::Good) => "Good",
        (Locale::PtBr, Status::Weak) => "Fraco",
        (Locale::PtBr, Status::Reasonable) => "Razoável",
        (Locale::PtBr, Status::Good) => "Bom",
    }
}

/// Headings and captions used by the Markdown health report.
#[derive(Debug, Clone, Copy)]
pub struct ReportLabels {
    pub heading: &'static str,
    pub overall: &'static str,
    pub score: &'static str,
    pub current_value: &'static str,
    pub recommendation: &'static str,
    pub checks: &'static str,
}

const EN_LABELS: ReportLabels = ReportLabels {
    heading: "Profile Health",
    overall: "Overall score",
    score: "Score",
    current_value: "Current value",
    recommendation: "Recommendation",
    checks: "Checks",
};

const PT_BR_LABELS: ReportLabels = ReportLabels {
    heading: "Análise de Saúde",
    overall: "Pontuação geral",
    score: "Pontuação",
    current_value: "Valor Atual",
    recommendation: "Recomendação",
    checks: "Verificações",
};

pub fn report_labels(locale: Locale) -> ReportLabels {
    match locale {
        Locale::En => EN_LABELS,
        Locale::PtBr => PT_BR_LABELS,
    }
}

/// Headings and captions used by the Markdown engagement summary.
#[derive(Debug, Clone, Copy)]
pub struct SummaryLabels {
    pub heading: &'static str,
    pub reviews: &'static str,
    pub total: &'static str,
    pub answered: &'static str,
    pub unanswered: &'static str,
    pub response_rate: &'static str,
    pub average_rating: &'static str,
    pub posts: &'static str,
    pub media: &'static str,
    pub photos: &'static str,
    pub videos: &'static str,
    pub other: &'static str,
    pub questions: &'static str,
    pub performance: &'static str,
    pub total_views: &'static str,
    pub total_interactions: &'static str,
    pub website_clicks: &'static str,
    pub calls: &'static str,
    pub directions: &'static str,
    pub messages: &'static str,
    pub bookings: &'static str,
    pub views_by_surface: &'static str,
    pub keywords: &'static str,
    pub none: &'static str,
    pub not_available: &'static str,
}

const EN_SUMMARY_LABELS: SummaryLabels = SummaryLabels {
    heading: "Engagement Summary",
    reviews: "Reviews",
    total: "total",
    answered: "answered",
    unanswered: "unanswered",
    response_rate: "response rate",
    average_rating: "average rating",
    posts: "Posts",
    media: "Media",
    photos: "photos",
    videos: "videos",
    other: "other",
    questions: "Questions",
    performance: "Performance",
    total_views: "total views",
    total_interactions: "total interactions",
    website_clicks: "website clicks",
    calls: "calls",
    directions: "directions",
    messages: "messages",
    bookings: "bookings",
    views_by_surface: "Views by surface",
    keywords: "Top search keywords",
    none: "none",
    not_available: "n/a",
};

const PT_BR_SUMMARY_LABELS: SummaryLabels = SummaryLabels {
    heading: "Resumo de Engajamento",
    reviews: "Avaliações",
    total: "total",
    answered: "respondidas",
    unanswered: "sem resposta",
    response_rate: "taxa de resposta",
    average_rating: "nota média",
    posts: "Postagens",
    media: "Mídia",
    photos: "fotos",
    videos: "vídeos",
    other: "outros",
    questions: "Perguntas",
    performance: "Desempenho",
    total_views: "visualizações totais",
    total_interactions: "interações totais",
    website_clicks: "cliques no site",
    calls: "ligações",
    directions: "rotas",
    messages: "mensagens",
    bookings: "reservas",
    views_by_surface: "Visualizações por origem",
    keywords: "Principais termos de pesquisa",
    none: "nenhum",
    not_available: "n/d",
};

pub fn summary_labels(locale: Locale) -> SummaryLabels {
    match locale {
        Locale::En => EN_SUMMARY_LABELS,
        Locale::PtBr => PT_BR_SUMMARY_LABELS,
    }
}

pub fn rating_label(locale: Locale, rating: StarRating) -> String {
    match (locale, rating) {
        (Locale::En, StarRating::Unspecified) => "unrated".to_string(),
        (Locale::PtBr, StarRating::Unspecified) => "sem nota".to_string(),
        (Locale::En, StarRating::One) => "1 star".to_string(),
        (Locale::PtBr, StarRating::One) => "1 estrela".to_string(),
        (Locale::En, rating) => format!("{} stars", rating.stars()),
        (Locale::PtBr, rating) => format!("{} estrelas", rating.stars()),
    }
}

pub fn surface_label(locale: Locale, surface: Surface) -> &'static str {
    match (locale, surface) {
        (Locale::En, Surface::MobileSearch) => "Google Search - Mobile",
        (Locale::En, Surface::MobileMaps) => "Google Maps - Mobile",
        (Locale::En, Surface::DesktopSearch) => "Google Search - Desktop",
        (Locale::En, Surface::DesktopMaps) => "Google Maps - Desktop",
        (Locale::PtBr, Surface::MobileSearch) => "Pesquisa Google - Celular",
        (Locale::PtBr, Surface::MobileMaps) => "Google Maps - Celular",
        (Locale::PtBr, Surface::DesktopSearch) => "Pesquisa Google - Computador",
        (Locale::PtBr, Surface::DesktopMaps) => "Google Maps - Computador",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tag_accepts_common_spellings() {
        assert_eq!(Locale::from_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_tag("EN-us"), Some(Locale::En));
        assert_eq!(Locale::from_tag("pt-BR"), Some(Locale::PtBr));
        assert_eq!(Locale::from_tag("pt_br"), Some(Locale::PtBr));
        assert_eq!(Locale::from_tag(" pt "), Some(Locale::PtBr));
        assert_eq!(Locale::from_tag("fr"), None);
    }

    #[test]
    fn every_check_has_text_in_every_locale() {
        for locale in [Locale::En, Locale::PtBr] {
            for id in crate::health::battery_ids() {
                let text = check_text(locale, id);
                assert!(!text.title.is_empty());
                assert!(!text.description.is_empty());
            }
        }
    }

    #[test]
    fn advice_interpolates_parameters() {
        let rendered = advice(
            Locale::PtBr,
            Advice::PostAge {
                days: 12,
                max_days: 30,
            },
        );
        assert_eq!(
            rendered,
            "Dias desde a última postagem: 12. Máximo recomendado: 30 dias."
        );
        assert!(advice(Locale::En, Advice::None).is_empty());
    }

    #[test]
    fn readings_are_localised() {
        assert_eq!(reading(Locale::En, &Reading::Days(4)), "4 days");
        assert_eq!(reading(Locale::PtBr, &Reading::Unanswered(2)), "2 sem resposta");
        assert_eq!(reading(Locale::PtBr, &Reading::Chars(51)), "51 chars");
    }

    #[test]
    fn summary_labels_follow_locale() {
        assert_eq!(summary_labels(Locale::En).heading, "Engagement Summary");
        assert_eq!(summary_labels(Locale::PtBr).heading, "Resumo de Engajamento");
        assert_eq!(rating_label(Locale::En, StarRating::Five), "5 stars");
        assert_eq!(rating_label(Locale::PtBr, StarRating::One), "1 estrela");
        assert_eq!(
            surface_label(Locale::PtBr, Surface::MobileMaps),
            "Google Maps - Celular"
        );
    }
}
