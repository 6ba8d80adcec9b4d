use iced::widget::{column, container, scrollable, text, Column};
use iced::{Element, Length};
use qa_core::Msg;

use super::constants::*;

/// Titled, bordered section.
pub fn card<'a>(title: &'a str, body: impl Into<Element<'a, Msg>>) -> Element<'a, Msg> {
    let body: Element<'a, Msg> = body.into();
    container(column![text(title).size(HEADING_SIZE), body].spacing(INNER_SPACING))
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

/// Stacks sections top to bottom inside a scrollable page.
pub fn page(sections: Vec<Element<'_, Msg>>) -> Element<'_, Msg> {
    scrollable(
        Column::with_children(sections)
            .spacing(SECTION_SPACING)
            .padding(PAGE_PADDING)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}
