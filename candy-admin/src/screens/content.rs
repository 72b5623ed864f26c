//! Content AI tab
//!
//! Hosts the generation workflow, the generation history, the event
//! calendar with its templates, locale-filtered template suggestions and
//! the campaign builder.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use shared::models::{ContentRating, ContentType, EventTemplate, GeneratedContent, TemplateEvent};
use shared::util::relative_time;
use shared::{AppError, ErrorCode};
use tokio::sync::Mutex;

use super::{Screen, ViewContext, error_line, header, list_body, settle};
use crate::campaign::CampaignBuilder;
use crate::components::{Button, ButtonSize, ButtonVariant, Card, Input};
use crate::content::{Clipboard, ContentWorkflow, Phase};
use crate::error::AdminResult;
use crate::hooks::{EventTemplatesHook, TemplateSuggestionsHook};
use crate::router::Tab;
use crate::theme::event_type_color;

pub struct ContentScreen {
    workflow: Mutex<ContentWorkflow>,
    suggestions: TemplateSuggestionsHook,
    events: EventTemplatesHook,
    clipboard: Arc<dyn Clipboard>,
    campaign: Mutex<Option<CampaignBuilder>>,
}

impl ContentScreen {
    pub fn new(
        workflow: ContentWorkflow,
        suggestions: TemplateSuggestionsHook,
        events: EventTemplatesHook,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            workflow: Mutex::new(workflow),
            suggestions,
            events,
            clipboard,
            campaign: Mutex::new(None),
        }
    }

    pub fn events(&self) -> &EventTemplatesHook {
        &self.events
    }

    pub fn suggestions(&self) -> &TemplateSuggestionsHook {
        &self.suggestions
    }

    pub async fn set_prompt(&self, prompt: impl Into<String>) {
        self.workflow.lock().await.set_prompt(prompt);
    }

    pub async fn set_content_type(&self, content_type: ContentType) {
        self.workflow.lock().await.set_content_type(content_type);
    }

    pub async fn phase(&self) -> Phase {
        self.workflow.lock().await.phase()
    }

    pub async fn current(&self) -> Option<GeneratedContent> {
        self.workflow.lock().await.current().cloned()
    }

    pub async fn generate(&self) -> AdminResult<GeneratedContent> {
        self.workflow.lock().await.generate().await.cloned()
    }

    pub async fn rate(&self, rating: ContentRating) -> AdminResult<()> {
        self.workflow.lock().await.rate(rating).await
    }

    pub async fn save_template(&self) -> AdminResult<()> {
        self.workflow.lock().await.save_template().await?;
        settle(self.suggestions.fetch().await)
    }

    pub async fn publish(&self, now: DateTime<Utc>) -> AdminResult<()> {
        self.workflow.lock().await.publish(now).await
    }

    pub async fn copy(&self, now: DateTime<Utc>) -> AdminResult<()> {
        self.workflow.lock().await.copy(self.clipboard.as_ref(), now)
    }

    pub async fn delete_history(&self, id: &str) -> AdminResult<()> {
        self.workflow.lock().await.delete_history(id).await
    }

    pub async fn resume(&self, id: &str) -> AdminResult<GeneratedContent> {
        self.workflow.lock().await.resume(id).await.cloned()
    }

    pub async fn history(&self) -> Vec<GeneratedContent> {
        self.workflow.lock().await.history().collection().items().await
    }

    /// Start the prompt from a suggested template
    pub async fn use_suggestion(&self, id: &str) -> AdminResult<()> {
        let suggestion = self
            .suggestions
            .collection()
            .items()
            .await
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::TemplateNotFound).with_detail("id", id))?;
        self.workflow.lock().await.apply_template(&suggestion);
        Ok(())
    }

    /// Start the prompt from one of the locale's quick templates
    pub async fn use_quick_template(&self, text: &str) {
        self.workflow.lock().await.set_prompt(text);
    }

    /// Clone an event template onto another event and reload the calendar
    pub async fn clone_template(
        &self,
        template_id: &str,
        event_id: &str,
        context: Map<String, Value>,
    ) -> AdminResult<EventTemplate> {
        let known = self.events.events().items().await.iter().any(|e| e.id == event_id);
        if !known {
            return Err(AppError::new(ErrorCode::EventNotFound).with_detail("id", event_id).into());
        }
        let cloned = self.events.clone_template_for_event(template_id, event_id, context).await?;
        settle(self.events.fetch_event_templates().await)?;
        Ok(cloned)
    }

    /// Open or close the campaign builder; returns whether it is open
    pub async fn toggle_campaign(&self) -> bool {
        let mut campaign = self.campaign.lock().await;
        *campaign = match campaign.take() {
            Some(_) => None,
            None => Some(CampaignBuilder::new()),
        };
        campaign.is_some()
    }

    /// Open the campaign builder prefilled from a calendar event
    pub async fn campaign_for_event(&self, event_id: &str) -> AdminResult<()> {
        let event = self
            .events
            .events()
            .items()
            .await
            .into_iter()
            .find(|e| e.id == event_id)
            .ok_or_else(|| AppError::new(ErrorCode::EventNotFound).with_detail("id", event_id))?;
        let mut campaign = self.campaign.lock().await;
        campaign.get_or_insert_with(CampaignBuilder::new).prefill_from_event(&event);
        Ok(())
    }

    /// Run `f` against the open campaign builder
    pub async fn with_campaign<R>(&self, f: impl FnOnce(&mut CampaignBuilder) -> R) -> Option<R> {
        self.campaign.lock().await.as_mut().map(f)
    }

    fn render_event(ctx: &ViewContext, event: &TemplateEvent, templates: &[EventTemplate]) -> String {
        let mut card = Card::titled(format!(
            "{}  [{}] {}",
            event.name,
            event_type_color(event.event_type),
            ctx.tr(&format!("contentAI.eventTypes.{}", event.event_type.as_str()))
        ));
        if !event.description.is_empty() {
            card.push(&event.description);
        }
        card.push(format!("{} {}", event.days_until(ctx.now).max(0), ctx.tr("contentAI.daysUntil")));
        if !event.regions.is_empty() {
            card.push(format!("{}: {}", ctx.tr("contentAI.regions"), event.regions.join(", ")));
        }
        for template in templates.iter().filter(|t| t.event_id == event.id) {
            let perf = &template.event_performance;
            card.push(format!(
                "- {}  {} {}  {:.1}% {}",
                template.template_name.as_deref().unwrap_or(&template.content),
                perf.engagement,
                ctx.tr("contentAI.metrics.engagements"),
                perf.conversion_rate(),
                ctx.tr("contentAI.metrics.conversions"),
            ));
        }
        card.render()
    }

    async fn render_workflow(&self, ctx: &ViewContext, out: &mut Vec<String>) {
        let workflow = self.workflow.lock().await;
        let types = ContentType::ALL
            .iter()
            .map(|t| {
                let label = ctx.tr(&format!("contentAI.types.{}", t.as_str()));
                let variant = if *t == workflow.content_type() {
                    ButtonVariant::Primary
                } else {
                    ButtonVariant::Outline
                };
                Button::new(label).variant(variant).size(ButtonSize::Small).render()
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push(types);
        out.push(
            Input::new(ctx.tr("contentAI.generate"))
                .value(workflow.prompt())
                .placeholder(ctx.tr("contentAI.promptPlaceholder"))
                .render(),
        );
        out.push(
            Button::new(ctx.tr("contentAI.generate"))
                .loading(workflow.phase() == Phase::Generating)
                .render(),
        );
        if let Some(line) = error_line(ctx, workflow.error()) {
            out.push(line);
        }

        if let Some(current) = workflow.current() {
            let mut card = Card::titled(ctx.tr("contentAI.generatedContent"));
            for line in current.content.lines() {
                card.push(line);
            }
            let copy_key = if workflow.is_copied(ctx.now) {
                "contentAI.copied"
            } else {
                "contentAI.copy"
            };
            card.push(Button::new(ctx.tr(copy_key)).variant(ButtonVariant::Outline).render());
            card.push(match current.rating {
                Some(ContentRating::Useful) => ctx.tr("contentAI.rating.useful"),
                Some(ContentRating::NotRelevant) => ctx.tr("contentAI.rating.notRelevant"),
                None => format!(
                    "{} {}",
                    Button::new(ctx.tr("contentAI.rating.useful")).size(ButtonSize::Small).render(),
                    Button::new(ctx.tr("contentAI.rating.notRelevant"))
                        .size(ButtonSize::Small)
                        .render()
                ),
            });
            if current.is_template {
                card.push(ctx.tr("contentAI.rating.saved"));
            } else if workflow.can_save_template() {
                card.push(Button::new(ctx.tr("contentAI.rating.saveTemplate")).render());
            }
            card.push(if current.is_published() {
                ctx.tr("contentAI.published")
            } else {
                Button::new(ctx.tr("contentAI.post"))
                    .loading(workflow.phase() == Phase::Publishing)
                    .render()
            });
            out.push(card.render());
        }

        let history = workflow.history().collection().snapshot().await;
        out.push(ctx.tr("contentAI.history"));
        let rows = history
            .items
            .iter()
            .map(|c| {
                let preview: String = c.content.lines().next().unwrap_or_default().chars().take(48).collect();
                format!(
                    "{}  [{}] {}  {}",
                    relative_time(c.created_at, ctx.now),
                    c.content_type,
                    preview,
                    if c.is_published() { ctx.tr("contentAI.published") } else { String::new() }
                )
            })
            .collect();
        out.extend(list_body(ctx, history.error.as_deref(), rows));
    }
}

#[async_trait]
impl Screen for ContentScreen {
    fn tab(&self) -> Tab {
        Tab::Content
    }

    async fn refresh(&self) -> AdminResult<()> {
        settle(self.workflow.lock().await.history().fetch().await)?;
        settle(self.suggestions.fetch().await)?;
        settle(self.events.refetch(Utc::now()).await)
    }

    async fn render(&self, ctx: &ViewContext) -> String {
        let mut out = vec![header(ctx, "contentAI.title", Some("contentAI.subtitle"))];
        self.render_workflow(ctx, &mut out).await;

        out.push(header(ctx, "contentAI.upcomingEvents", Some("contentAI.eventCalendarSubtitle")));
        let events = self.events.events().snapshot().await;
        let templates = self.events.templates().items().await;
        if let Some(line) = error_line(ctx, events.error.as_deref()) {
            out.push(line);
        } else if events.items.is_empty() {
            out.push(ctx.tr("contentAI.noUpcomingEvents"));
        }
        out.extend(events.items.iter().map(|e| Self::render_event(ctx, e, &templates)));

        out.push(header(ctx, "contentAI.suggestions.title", Some("contentAI.suggestions.subtitle")));
        let suggestions = self.suggestions.collection().snapshot().await;
        let rows = suggestions
            .items
            .iter()
            .map(|s| {
                format!(
                    "{}  {} {}  {} {:.1}",
                    s.display_name(),
                    s.usage_count,
                    ctx.tr("contentAI.metrics.uses"),
                    ctx.tr("contentAI.metrics.rating"),
                    s.average_rating
                )
            })
            .collect();
        out.extend(list_body(ctx, suggestions.error.as_deref(), rows));

        for group in ctx.translator.template_groups() {
            let mut card = Card::titled(group.title);
            for template in group.templates {
                card.push(*template);
            }
            out.push(card.render());
        }

        match self.campaign.lock().await.as_ref() {
            Some(builder) => out.push(render_campaign(ctx, builder)),
            None => out.push(Button::new(ctx.tr("contentAI.campaign.create")).render()),
        }
        out.join("\n")
    }
}

fn render_campaign(ctx: &ViewContext, builder: &CampaignBuilder) -> String {
    use crate::campaign::CampaignStep;

    let tabs = CampaignStep::ALL
        .iter()
        .map(|step| {
            let mark = if *step == builder.step() { "*" } else { " " };
            format!("{}{}", mark, ctx.tr(step.title_key()))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    let mut card = Card::titled(ctx.tr("contentAI.campaign.title"));
    card.push(tabs);
    let form = &builder.form;
    let fields = match builder.step() {
        CampaignStep::Event => vec![
            Input::new(ctx.tr("contentAI.campaign.eventName"))
                .value(&form.event_name)
                .placeholder(ctx.tr("contentAI.campaign.eventNamePlaceholder")),
            Input::new(ctx.tr("contentAI.campaign.startDate")).value(&form.start_date).placeholder("YYYY-MM-DD"),
            Input::new(ctx.tr("contentAI.campaign.endDate")).value(&form.end_date).placeholder("YYYY-MM-DD"),
        ],
        CampaignStep::Audience => vec![
            Input::new(ctx.tr("contentAI.campaign.selectRegions")).value(form.regions.join(", ")),
            Input::new(ctx.tr("contentAI.campaign.audienceDescription")).value(&form.audience_description),
        ],
        CampaignStep::Content => vec![
            Input::new(ctx.tr("contentAI.campaign.createContent"))
                .value(ctx.tr(&format!("contentAI.types.{}", form.content_type.as_str()))),
            Input::new(ctx.tr("contentAI.campaign.message")).value(&form.message),
        ],
        CampaignStep::Schedule => vec![
            Input::new(ctx.tr("contentAI.campaign.sendDate")).value(&form.send_date).placeholder("YYYY-MM-DD"),
            Input::new(ctx.tr("contentAI.campaign.channels")).value(form.channels.join(", ")),
        ],
    };
    for field in fields {
        card.push(field.render());
    }
    card.push(format!(
        "{} {}",
        Button::new(ctx.tr("common.back")).variant(ButtonVariant::Outline).render(),
        Button::new(ctx.tr("common.continue")).render()
    ));
    card.render()
}
