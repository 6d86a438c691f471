use crate::i18n::{rating_label, report_labels, status_label, summary_labels, surface_label};
use crate::summary::EngagementSummary;
use crate::types::health::HealthReport;

pub fn to_markdown(report: &HealthReport) -> String {
    let labels = report_labels(report.locale);
    let mut output = String::new();

    if report.location.is_empty() {
        output.push_str(&format!("# {}\n\n", labels.heading));
    } else {
        output.push_str(&format!("# {}: {}\n\n", labels.heading, report.location));
    }
    if let Some(snapshot) = &report.snapshot {
        output.push_str(&format!("Snapshot: {snapshot}\n"));
    }
    output.push_str(&format!(
        "Generated at: {} ({})\n\n",
        report.generated_at,
        report.locale.tag()
    ));
    output.push_str(&format!(
        "{}: {}/100\n\n",
        labels.overall, report.overall_score
    ));
    output.push_str(&format!(
        "- {}: {}\n- {}: {}\n- {}: {}\n\n",
        status_label(report.locale, crate::types::health::Status::Weak),
        report.counts.weak,
        status_label(report.locale, crate::types::health::Status::Reasonable),
        report.counts.reasonable,
        status_label(report.locale, crate::types::health::Status::Good),
        report.counts.good
    ));

    output.push_str(&format!("## {}\n\n", labels.checks));
    for check in &report.checks {
        output.push_str(&format!(
            "### [{}] {}\n\n",
            status_label(report.locale, check.status),
            check.title
        ));
        output.push_str(&format!("{}\n\n", check.description));
        output.push_str(&format!("- {}: {}/100\n", labels.score, check.score));
        if let Some(value) = &check.value {
            output.push_str(&format!("- {}: {}\n", labels.current_value, value));
        }
        if !check.recommendation.is_empty() {
            output.push_str(&format!(
                "- {}: {}\n",
                labels.recommendation, check.recommendation
            ));
        }
        output.push('\n');
    }

    output
}

pub fn summary_to_markdown(summary: &EngagementSummary) -> String {
    let locale = summary.locale;
    let labels = summary_labels(locale);
    let mut output = String::new();
    if summary.location.is_empty() {
        output.push_str(&format!("# {}\n\n", labels.heading));
    } else {
        output.push_str(&format!("# {}: {}\n\n", labels.heading, summary.location));
    }

    let reviews = &summary.reviews;
    output.push_str(&format!("## {}\n\n", labels.reviews));
    output.push_str(&format!(
        "- {}: {}\n- {}: {}\n- {}: {}\n",
        labels.total,
        reviews.total,
        labels.answered,
        reviews.answered,
        labels.unanswered,
        reviews.unanswered
    ));
    match reviews.response_rate {
        Some(rate) => output.push_str(&format!("- {}: {rate:.1}%\n", labels.response_rate)),
        None => output.push_str(&format!(
            "- {}: {}\n",
            labels.response_rate, labels.not_available
        )),
    }
    match reviews.average_rating {
        Some(average) => {
            output.push_str(&format!("- {}: {average:.2}\n", labels.average_rating))
        }
        None => output.push_str(&format!(
            "- {}: {}\n",
            labels.average_rating, labels.not_available
        )),
    }
    for entry in &reviews.distribution {
        output.push_str(&format!(
            "- {}: {}\n",
            rating_label(locale, entry.rating),
            entry.count
        ));
    }
    output.push('\n');

    output.push_str(&format!("## {}\n\n", labels.posts));
    if summary.posts.is_empty() {
        output.push_str(&format!("- {}\n\n", labels.none));
    } else {
        for group in &summary.posts {
            output.push_str(&format!(
                "- {} / {}: {}\n",
                group.topic_type, group.state, group.count
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!("## {}\n\n", labels.media));
    output.push_str(&format!(
        "- {}: {}\n- {}: {}\n- {}: {}\n\n",
        labels.photos,
        summary.media.photos,
        labels.videos,
        summary.media.videos,
        labels.other,
        summary.media.other
    ));

    output.push_str(&format!("## {}\n\n", labels.questions));
    output.push_str(&format!("- {}: {}\n", labels.total, summary.questions));

    if let Some(performance) = &summary.performance {
        let interactions = &performance.interactions;
        output.push_str(&format!("\n## {}\n\n", labels.performance));
        output.push_str(&format!(
            "- {}: {}\n- {}: {}\n",
            labels.total_views,
            performance.total_views,
            labels.total_interactions,
            performance.total_interactions
        ));
        for (label, count) in [
            (labels.website_clicks, interactions.website_clicks),
            (labels.calls, interactions.calls),
            (labels.directions, interactions.directions),
            (labels.messages, interactions.messages),
            (labels.bookings, interactions.bookings),
        ] {
            output.push_str(&format!("- {label}: {count}\n"));
        }

        if !performance.surfaces.is_empty() {
            output.push_str(&format!("\n### {}\n\n", labels.views_by_surface));
            for surface in &performance.surfaces {
                output.push_str(&format!(
                    "- {}: {}\n",
                    surface_label(locale, surface.surface),
                    surface.views
                ));
            }
        }
    }

    if !summary.top_keywords.is_empty() {
        output.push_str(&format!("\n## {}\n\n", labels.keywords));
        for (rank, keyword) in summary.top_keywords.iter().enumerate() {
            let count = if keyword.approximate {
                format!("< {}", keyword.count)
            } else {
                keyword.count.to_string()
            };
            output.push_str(&format!("{}. {}: {}\n", rank + 1, keyword.keyword, count));
        }
    }

    output
}
