//! Меню: навигация по кнопкам с буфером ввода
//!
//! Ось вверх/вниз двигает выделение (с wrap-around), после шага ввод
//! игнорируется `buffer_time` секунд. Submit активирует выделенную кнопку.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    ShowInfo,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: String,
    pub action: MenuAction,
}

impl MenuButton {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Событие: игрок выбрал пункт меню
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuActionChosen {
    pub action: MenuAction,
}

/// Сырой ввод меню (заполняет input коллаборатор)
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MenuInput {
    /// > 0: вверх, < 0: вниз
    pub vertical: f32,
    pub submit: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct MenuWidget {
    buttons: Vec<MenuButton>,
    selected: usize,
    buffer_time: f32,
    /// None: ввод принимается
    timer: Option<f32>,
    info_visible: bool,
}

impl Default for MenuWidget {
    fn default() -> Self {
        Self::main_menu()
    }
}

impl MenuWidget {
    pub fn new(buttons: Vec<MenuButton>, buffer_time: f32) -> Self {
        let mut widget = Self {
            buttons,
            selected: 0,
            buffer_time,
            timer: None,
            info_visible: false,
        };
        // Первая кнопка выделена сразу, как после обычного шага
        if !widget.buttons.is_empty() {
            widget.timer = Some(0.0);
        }
        widget
    }

    pub fn main_menu() -> Self {
        Self::new(
            vec![
                MenuButton::new("Start", MenuAction::StartGame),
                MenuButton::new("Info", MenuAction::ShowInfo),
                MenuButton::new("Quit", MenuAction::Quit),
            ],
            0.5,
        )
    }

    pub fn buttons(&self) -> &[MenuButton] {
        &self.buttons
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.buttons.is_empty()).then_some(self.selected)
    }

    pub fn selected_button(&self) -> Option<&MenuButton> {
        self.buttons.get(self.selected)
    }

    pub fn is_buffering(&self) -> bool {
        self.timer.is_some()
    }

    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    /// Прямой выбор (мышь). Индекс вне списка игнорируется.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.buttons.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Один кадр: буфер ввода + навигация по оси
    pub fn update(&mut self, axis: f32, delta: f32) {
        match self.timer {
            None => {
                if axis != 0.0 {
                    self.step(axis);
                }
            }
            Some(elapsed) => {
                let elapsed = elapsed + delta;
                self.timer = if elapsed >= self.buffer_time {
                    None
                } else {
                    Some(elapsed)
                };
            }
        }
    }

    /// Активировать выделенную кнопку
    pub fn submit(&mut self) -> Option<MenuAction> {
        let action = self.selected_button()?.action;
        if action == MenuAction::ShowInfo {
            self.info_visible = true;
        }
        Some(action)
    }

    fn step(&mut self, axis: f32) {
        let count = self.buttons.len();
        if count == 0 {
            return;
        }

        if axis < 0.0 {
            self.selected = (self.selected + 1) % count;
        } else if axis > 0.0 {
            self.selected = (self.selected + count - 1) % count;
        }
        self.timer = Some(0.0);
    }
}

/// Система: MenuInput → навигация / MenuActionChosen
pub fn drive_menu(
    mut menu: ResMut<MenuWidget>,
    mut input: ResMut<MenuInput>,
    time: Res<Time>,
    mut chosen: EventWriter<MenuActionChosen>,
) {
    menu.update(input.vertical, time.delta_secs());

    if input.submit {
        input.submit = false;
        if let Some(action) = menu.submit() {
            crate::log_info(&format!("Menu: {:?}", action));
            chosen.write(MenuActionChosen { action });
        }
    }
}

/// Главное меню (отдельная сцена, не входит в SimulationPlugin)
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuWidget>()
            .init_resource::<MenuInput>()
            .add_event::<MenuActionChosen>()
            .add_systems(Update, drive_menu);
    }
}
