use super::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.layout.calculate_layout(area);

        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Topbar => self.render_topbar(frame, panel.rect),
                PanelType::Body => self.render_body(frame, panel.rect),
                PanelType::Summary => self.render_summary(frame, panel.rect),
                PanelType::Footer => self.render_footer(frame, panel.rect),
            }
        }

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_topbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::Paragraph;

        let current = self.wizard.step();
        let mut spans = vec![Span::styled(
            " recipe-wizard ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for (i, step) in WizardStep::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" › "));
            }
            let style = if step == current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(step.title(), style));
        }
        spans.push(Span::raw("   [?] help"));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        match self.wizard.step() {
            WizardStep::Flavor => self.render_flavors(frame, area),
            WizardStep::Cuisine => self.render_cuisines(frame, area),
            WizardStep::Ingredients => self.render_ingredients(frame, area),
            WizardStep::Recipe => self.render_recipe(frame, area),
        }
    }

    fn render_flavors(&self, frame: &mut Frame, area: Rect) {
        let options = FlavorProfile::ALL
            .into_iter()
            .map(|flavor| (flavor.name(), catalog::flavor_description(flavor)))
            .collect();
        self.render_choices(frame, area, " What flavor are you craving? ", options);
    }

    fn render_cuisines(&self, frame: &mut Frame, area: Rect) {
        let title = match self.wizard.state().selected_flavor {
            Some(flavor) => format!(" Cuisines that suit {} ", flavor.name().to_lowercase()),
            None => " Choose a cuisine ".to_string(),
        };
        let options = self
            .wizard
            .available_cuisines()
            .into_iter()
            .map(|cuisine| (cuisine.name(), catalog::cuisine_description(cuisine)))
            .collect();
        self.render_choices(frame, area, &title, options);
    }

    fn render_choices(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        options: Vec<(&'static str, &'static str)>,
    ) {
        use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

        let items: Vec<ListItem> = options
            .into_iter()
            .map(|(name, description)| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        name,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("  {description}"),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(self.cursor));

        frame.render_stateful_widget(
            List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title.to_string()))
                .highlight_symbol("> ")
                .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            area,
            &mut state,
        );
    }

    fn render_ingredients(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

        let selection = self.wizard.selection();
        let mut items: Vec<ListItem> = vec![];
        let mut highlighted = None;
        let mut index = 0;

        for group in group_by_category(&self.wizard.annotated_catalog()) {
            items.push(
                ListItem::new(format!(" {} ", group.category.title().to_uppercase()))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            );
            for ingredient in &group.items {
                if index == self.cursor {
                    highlighted = Some(items.len());
                }
                let mark = if selection.contains(&ingredient.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if ingredient.recommended {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                items.push(
                    ListItem::new(format!("  {mark} {}", ingredient.display_name())).style(style),
                );
                index += 1;
            }
        }

        let mut state = ListState::default();
        state.select(highlighted);

        let title = format!(" Ingredients ({} selected, * recommended) ", selection.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            area,
            &mut state,
        );
    }

    fn render_recipe(&mut self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let Some(recipe) = self.wizard.recipe() else {
            frame.render_widget(
                Paragraph::new("No recipe yet.")
                    .block(Block::default().borders(Borders::ALL).title(" Recipe ")),
                area,
            );
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", recipe.title));
        let inner = block.inner(area);
        let paragraph = Paragraph::new(recipe_lines(recipe)).wrap(Wrap { trim: false });

        // Scrolling counts wrapped rows, so the limit depends on the current width.
        let rows = paragraph.line_count(inner.width);
        self.recipe_max_scroll =
            u16::try_from(rows.saturating_sub(usize::from(inner.height))).unwrap_or(u16::MAX);
        self.recipe_scroll = self.recipe_scroll.min(self.recipe_max_scroll);

        frame.render_widget(
            paragraph.block(block).scroll((self.recipe_scroll, 0)),
            area,
        );
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let state = self.wizard.state();
        let label = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Flavor: ", label),
                Span::raw(state.selected_flavor.map_or("-", |f| f.name())),
            ]),
            Line::from(vec![
                Span::styled("Cuisine: ", label),
                Span::raw(state.selected_cuisine.map_or("-", |c| c.name())),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("Ingredients ({})", state.selected_ingredients.len()),
                label,
            )),
        ];
        lines.extend(
            state
                .selected_ingredients
                .iter()
                .map(|ingredient| Line::from(format!("  {}", ingredient.name))),
        );

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" Your picks "))
                .wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Paragraph};

        let line = if let Some(ref error) = self.last_error {
            Line::from(Span::styled(
                format!("⚠ {error}"),
                Style::default().fg(Color::Red),
            ))
        } else if let Some(toast) = self.notices.back() {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", toast.notice.title),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::raw(toast.notice.description.clone()),
            ])
        } else {
            Line::from("")
        };

        frame.render_widget(
            Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.keybinds.hint(self.wizard.step()))),
            ),
            area,
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Clear, Paragraph};
        let help_text = self.keybinds.help_text();
        let popup_area = self.centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(help_text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Press ? to close "),
            ),
            popup_area,
        );
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
                ratatui::layout::Constraint::Percentage(percent_y),
                ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints([
                ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
                ratatui::layout::Constraint::Percentage(percent_x),
                ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

fn recipe_lines(recipe: &Recipe) -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(recipe.description.clone()),
        Line::from(""),
        Line::from(format!(
            "Prep: {}  ·  Cook: {}  ·  Serves {}  ·  {}",
            recipe.preparation_time, recipe.cooking_time, recipe.servings, recipe.difficulty
        )),
        Line::from(""),
        Line::styled("Ingredients", heading),
    ];
    lines.extend(
        recipe
            .ingredients
            .iter()
            .map(|i| Line::from(format!("  • {} {}", i.amount, i.name))),
    );

    lines.push(Line::from(""));
    lines.push(Line::styled("Instructions", heading));
    lines.extend(
        recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(n, step)| Line::from(format!("  {}. {step}", n + 1))),
    );

    if !recipe.tips.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Tips", heading));
        lines.extend(recipe.tips.iter().map(|tip| Line::from(format!("  - {tip}"))));
    }

    lines
}
