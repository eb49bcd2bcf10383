//! Selected recipients panel: company selections and individual emails.

use iced::widget::{Column, button, column, container, scrollable, text};
use iced::{Element, Length};
use recipient_picker_core::RecipientStore;

use super::section::{email_row, section_header};
use crate::message::Message;
use crate::model::{PanelState, Section};
use crate::style::widgets::{
    danger_button_style, danger_link_button_style, palette, panel_style, scrollable_style,
    section_body_style,
};

/// Renders the right panel.
pub fn view_selected_panel(
    store: &RecipientStore,
    panels: &PanelState,
) -> Element<'static, Message> {
    let p = palette::current();

    let title = text(format!("Selected Recipients ({})", store.selected_count()))
        .size(20)
        .color(p.text_primary);

    let company = store.company_recipients();
    let company_open = panels.is_open(&Section::CompanyRecipients);
    let mut company_section = column![section_header(
        "Company Recipients",
        company.len(),
        company_open,
        Section::CompanyRecipients,
    )]
    .spacing(6);

    if company_open {
        let domains: Vec<Element<'static, Message>> = company
            .iter()
            .map(|(domain, emails)| view_company_domain(domain, emails, panels))
            .collect();
        company_section = company_section.push(
            Column::with_children(domains)
                .spacing(6)
                .padding(iced::Padding {
                    left: 12.0,
                    ..iced::Padding::ZERO
                }),
        );
    }

    let individual = store.email_recipients();
    let email_open = panels.is_open(&Section::EmailRecipients);
    let mut email_section = column![section_header(
        "Email Recipients",
        individual.len(),
        email_open,
        Section::EmailRecipients,
    )]
    .spacing(6);

    if email_open && !individual.is_empty() {
        let rows: Vec<Element<'static, Message>> = individual
            .iter()
            .map(|email| {
                email_row(
                    email,
                    "Remove",
                    danger_link_button_style,
                    Message::RemoveEmail(email.clone()),
                )
            })
            .collect();
        email_section = email_section.push(
            container(Column::with_children(rows).spacing(6).padding([8, 12]))
                .width(Length::Fill)
                .style(section_body_style),
        );
    }

    let content = column![
        title,
        scrollable(column![company_section, email_section].spacing(12))
            .height(Length::Fill)
            .style(scrollable_style),
    ]
    .spacing(16)
    .padding(20);

    container(content)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .style(panel_style)
        .into()
}

/// Renders one whole-domain selection.
fn view_company_domain(
    domain: &str,
    emails: &[String],
    panels: &PanelState,
) -> Element<'static, Message> {
    let p = palette::current();
    let section = Section::Company(domain.to_string());
    let open = panels.is_open(&section);
    let header = section_header(domain, emails.len(), open, section);

    if !open {
        return header;
    }

    let rows: Vec<Element<'static, Message>> = emails
        .iter()
        .map(|email| text(email.clone()).size(14).color(p.text_primary).into())
        .collect();

    let remove_all = button(text("Remove All").size(13))
        .padding([6, 14])
        .style(danger_button_style)
        .on_press(Message::RemoveDomain(domain.to_string()));

    let body = container(
        Column::with_children(rows)
            .push(remove_all)
            .spacing(6)
            .padding([8, 12]),
    )
    .width(Length::Fill)
    .style(section_body_style);

    column![header, body].spacing(2).into()
}
