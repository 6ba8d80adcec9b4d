use chrono::{DateTime, Local, Utc};
use iced::widget::{button, column, container, row, text, text_input, Column, Row};
use iced::{alignment, Color, Element, Length, Theme};
use qa_core::{
    AnswerView, AppViewModel, ConfidenceTier, ContentView, HistoryRowView, Msg, QuestionStepView,
};

use super::constants::*;
use super::layout::{card, page};

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

pub fn render(view: &AppViewModel) -> Element<'_, Msg> {
    let mut sections = vec![header(), url_step(view)];

    if let Some(step) = &view.question_step {
        sections.push(question_step(step));
    }
    if let Some(answer) = &view.answer {
        sections.push(answer_card(answer));
    }
    if view.loading {
        sections.push(loading_indicator());
    }
    if let Some(notice) = &view.notice {
        sections.push(notice_banner(notice));
    }
    sections.push(history_card(&view.history));

    page(sections)
}

fn header<'a>() -> Element<'a, Msg> {
    column![
        text(WINDOW_TITLE).size(TITLE_SIZE),
        text(TAGLINE).size(BODY_SIZE).color(MUTED),
    ]
    .spacing(4)
    .into()
}

fn url_step(view: &AppViewModel) -> Element<'_, Msg> {
    let input = text_input(URL_PLACEHOLDER, &view.url_input)
        .on_input(Msg::UrlInputChanged)
        .on_submit(Msg::AddUrlClicked)
        .padding(10)
        .size(BODY_SIZE);
    let add = button(text("Add URL").size(BODY_SIZE))
        .on_press(Msg::AddUrlClicked)
        .style(button::secondary);

    let mut body = Column::new()
        .spacing(INNER_SPACING)
        .push(text("Website URLs").size(BODY_SIZE))
        .push(row![input, add].spacing(INNER_SPACING));

    if !view.candidates.is_empty() {
        body = body.push(text("URLs to extract content from:").size(BODY_SIZE));
        for (index, url) in view.candidates.iter().enumerate() {
            body = body.push(
                row![
                    text(url.as_str()).size(BODY_SIZE).width(Length::Fill),
                    button(text("Remove").size(SMALL_SIZE))
                        .on_press(Msg::RemoveUrlClicked(index))
                        .style(button::danger),
                ]
                .spacing(INNER_SPACING)
                .align_y(alignment::Vertical::Center),
            );
        }
    }

    if let Some(content) = &view.content {
        body = body.push(text(content_status(content)).size(SMALL_SIZE).color(TIER_HIGH));
        if let Some(summary) = &content.summary {
            body = body.push(text(summary.as_str()).size(SMALL_SIZE).color(MUTED));
        }
    }

    body = body.push(
        button(text("Extract Content").size(BODY_SIZE))
            .on_press_maybe(view.can_extract.then_some(Msg::ExtractClicked))
            .style(button::primary),
    );

    card("Step 1: Enter URLs to Extract Content", body)
}

fn question_step(step: &QuestionStepView) -> Element<'_, Msg> {
    let input = text_input(QUESTION_PLACEHOLDER, &step.question)
        .on_input(Msg::QuestionChanged)
        .on_submit(Msg::AskClicked)
        .padding(10)
        .size(BODY_SIZE);

    let mut body = Column::new()
        .spacing(INNER_SPACING)
        .push(text("Your Question").size(BODY_SIZE))
        .push(input);

    if !step.models.is_empty() {
        let options = step.models.iter().map(|option| {
            let style: ButtonStyle = if option.selected {
                button::primary
            } else {
                button::secondary
            };
            button(text(option.name.as_str()).size(SMALL_SIZE))
                .on_press_maybe(
                    option
                        .available
                        .then(|| Msg::ModelSelected(option.key.clone())),
                )
                .style(style)
                .into()
        });
        body = body
            .push(text("Select QA Model").size(BODY_SIZE))
            .push(Row::with_children(options).spacing(INNER_SPACING));
        if let Some(description) = &step.selected_description {
            body = body.push(text(description.as_str()).size(SMALL_SIZE).color(MUTED));
        }
    }

    body = body.push(
        button(text("Get Answer").size(BODY_SIZE))
            .on_press_maybe(step.can_ask.then_some(Msg::AskClicked))
            .style(button::primary),
    );

    card("Step 2: Ask a Question", body)
}

fn answer_card(answer: &AnswerView) -> Element<'_, Msg> {
    let badges = row![
        text(answer.model_name.as_str()).size(SMALL_SIZE).color(MUTED),
        text(confidence_label(answer.confidence_percent))
            .size(SMALL_SIZE)
            .color(tier_color(answer.tier)),
    ]
    .spacing(INNER_SPACING * 2);

    let mut body = column![
        badges,
        text(format!("Q: {}", answer.question)).size(BODY_SIZE).color(MUTED),
        text(format_timestamp(answer.answered_at)).size(SMALL_SIZE).color(MUTED),
        text(answer.answer.as_str()).size(BODY_SIZE + 1),
    ]
    .spacing(INNER_SPACING);

    if let Some(context) = &answer.context {
        body = body.push(text(format!("Context: {context}")).size(SMALL_SIZE).color(MUTED));
    }

    card("Answer", body)
}

fn loading_indicator<'a>() -> Element<'a, Msg> {
    container(text("Loading...").size(BODY_SIZE))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn notice_banner(notice: &str) -> Element<'_, Msg> {
    container(text(notice).size(BODY_SIZE).color(TIER_LOW))
        .padding(10)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn history_card(history: &[HistoryRowView]) -> Element<'_, Msg> {
    if history.is_empty() {
        return card(
            "Question History",
            text("No questions asked yet").size(BODY_SIZE).color(MUTED),
        );
    }

    let rows = history.iter().map(|entry| {
        button(
            row![
                column![
                    text(entry.question.as_str()).size(BODY_SIZE),
                    text(format_clock(entry.asked_at)).size(SMALL_SIZE).color(MUTED),
                ]
                .spacing(2)
                .width(Length::Fill),
                text(entry.model_name.as_str()).size(SMALL_SIZE),
            ]
            .spacing(INNER_SPACING),
        )
        .on_press(Msg::HistorySelected(entry.index))
        .width(Length::Fill)
        .style(button::text)
        .into()
    });

    card("Question History", Column::with_children(rows).spacing(4))
}

fn content_status(content: &ContentView) -> String {
    let url_count = content.processed_urls.len();
    format!(
        "Content loaded from {} URL{} ({} characters)",
        url_count,
        if url_count == 1 { "" } else { "s" },
        content.content_chars
    )
}

fn confidence_label(percent: u8) -> String {
    format!("Confidence: {percent}%")
}

fn tier_color(tier: ConfidenceTier) -> Color {
    match tier {
        ConfidenceTier::High => TIER_HIGH,
        ConfidenceTier::Medium => TIER_MEDIUM,
        ConfidenceTier::Low => TIER_LOW,
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_clock(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}
