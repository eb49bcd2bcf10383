//! Available recipients panel: search box and domain groups.

use iced::widget::{Column, button, column, container, scrollable, text, text_input};
use iced::{Element, Length};
use recipient_picker_core::RecipientStore;

use super::section::{email_row, section_header};
use crate::message::Message;
use crate::model::{PanelState, Section};
use crate::style::widgets::{
    link_button_style, palette, panel_style, primary_button_style, scrollable_style,
    search_input_style, section_body_style,
};

/// Renders the left panel.
pub fn view_available_panel(
    store: &RecipientStore,
    panels: &PanelState,
) -> Element<'static, Message> {
    let p = palette::current();

    let title = text("Available Recipients").size(20).color(p.text_primary);

    let search = text_input("Search or add email", store.filter())
        .on_input(Message::SearchChanged)
        .on_submit(Message::SearchSubmitted)
        .padding([10, 14])
        .size(14)
        .style(search_input_style);

    let filtering = !store.filter().is_empty();
    let groups: Vec<Element<'static, Message>> = store
        .filtered_available()
        .into_iter()
        .map(|(domain, emails)| {
            let open = panels.is_available_open(&domain, filtering);
            view_domain_group(domain, &emails, open)
        })
        .collect();

    let list: Element<'static, Message> = if groups.is_empty() {
        let hint = if filtering {
            "No matches. Press Enter to add this address."
        } else {
            "No available recipients"
        };
        text(hint).size(13).color(p.text_muted).into()
    } else {
        Column::with_children(groups).spacing(8).into()
    };

    let content = column![
        title,
        search,
        scrollable(list).height(Length::Fill).style(scrollable_style),
    ]
    .spacing(16)
    .padding(20);

    container(content)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .style(panel_style)
        .into()
}

/// Renders one domain group with its matching emails.
fn view_domain_group(domain: String, emails: &[String], open: bool) -> Element<'static, Message> {
    let header = section_header(
        domain.clone(),
        emails.len(),
        open,
        Section::Available(domain.clone()),
    );

    if !open {
        return header;
    }

    let rows: Vec<Element<'static, Message>> = emails
        .iter()
        .map(|email| {
            email_row(
                email,
                "Select",
                link_button_style,
                Message::SelectEmail(email.clone()),
            )
        })
        .collect();

    let select_all = button(text("Select All").size(13))
        .padding([6, 14])
        .style(primary_button_style)
        .on_press(Message::SelectDomain(domain));

    let body = container(
        Column::with_children(rows)
            .push(select_all)
            .spacing(6)
            .padding([8, 12]),
    )
    .width(Length::Fill)
    .style(section_body_style);

    column![header, body].spacing(2).into()
}
