use crossterm::event::KeyCode;
use valuation::{PropertyInput, UnitType};

pub const AREA_MIN: u32 = 0;
pub const AREA_MAX: u32 = 10_000;
pub const AREA_STEP: u32 = 100;
pub const AREA_DEFAULT: u32 = 1079;

pub const ROOMS_MIN: u32 = 1;
pub const ROOMS_MAX: u32 = 5;

/// Form rows, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Area,
    Bedrooms,
    Bathrooms,
    UnitType,
    Location,
    Predict,
}

impl Field {
    pub const ORDER: [Field; 6] = [
        Field::Area,
        Field::Bedrooms,
        Field::Bathrooms,
        Field::UnitType,
        Field::Location,
        Field::Predict,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Area => "Area (in Sqft)",
            Field::Bedrooms => "Number of Bedrooms",
            Field::Bathrooms => "Number of Bathrooms",
            Field::UnitType => "Unit Type",
            Field::Location => "Location",
            Field::Predict => "Predict Price",
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// A bounded integer input that moves in fixed steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberField {
    value: u32,
    min: u32,
    max: u32,
    step: u32,
}

impl NumberField {
    /// Creates a field; `value` is clamped into `[min, max]`.
    pub fn new(value: u32, min: u32, max: u32, step: u32) -> Self {
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step,
        }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Steps up. Like every edit below, returns whether the value changed.
    pub fn increment(&mut self) -> bool {
        self.set(self.value.saturating_add(self.step))
    }

    pub fn decrement(&mut self) -> bool {
        self.set(self.value.saturating_sub(self.step))
    }

    /// Appends a typed digit. When the result would overflow `max`, typing
    /// starts over from that digit instead.
    pub fn push_digit(&mut self, digit: u32) -> bool {
        let appended = self.value.saturating_mul(10).saturating_add(digit);
        if appended > self.max {
            self.set(digit)
        } else {
            self.set(appended)
        }
    }

    pub fn pop_digit(&mut self) -> bool {
        self.set(self.value / 10)
    }

    fn set(&mut self, value: u32) -> bool {
        let value = value.clamp(self.min, self.max);
        let changed = value != self.value;
        self.value = value;
        changed
    }
}

/// A selector over a fixed list of options. Wraps around at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    options: Vec<T>,
    selected: usize,
}

impl<T> Choice<T> {
    pub fn new(options: Vec<T>) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.options.get(self.selected)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn position(&self) -> usize {
        self.selected
    }

    pub fn next(&mut self) -> bool {
        if self.options.len() < 2 {
            return false;
        }
        self.selected = (self.selected + 1) % self.options.len();
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.options.len() < 2 {
            return false;
        }
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        true
    }
}

/// What a key press meant for the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    None,
    Changed,
    Submit,
    Quit,
}

/// The property details form.
#[derive(Debug, Clone)]
pub struct FormState {
    pub area: NumberField,
    pub bedrooms: NumberField,
    pub bathrooms: NumberField,
    pub unit_type: Choice<UnitType>,
    pub location: Choice<String>,
    pub focus: Field,
}

impl FormState {
    /// Creates the form with its default values.
    ///
    /// # Args
    /// * `locations` - Options for the location selector, in display order.
    pub fn new<S: AsRef<str>>(locations: &[S]) -> Self {
        Self {
            area: NumberField::new(AREA_DEFAULT, AREA_MIN, AREA_MAX, AREA_STEP),
            bedrooms: NumberField::new(ROOMS_MIN, ROOMS_MIN, ROOMS_MAX, 1),
            bathrooms: NumberField::new(ROOMS_MIN, ROOMS_MIN, ROOMS_MAX, 1),
            unit_type: Choice::new(UnitType::ALL.to_vec()),
            location: Choice::new(locations.iter().map(|s| s.as_ref().to_owned()).collect()),
            focus: Field::Area,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> FormEvent {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => FormEvent::Quit,
            KeyCode::Char('p') => FormEvent::Submit,
            KeyCode::Up | KeyCode::BackTab => {
                self.focus = self.focus.prev();
                FormEvent::None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus = self.focus.next();
                FormEvent::None
            }
            KeyCode::Enter => {
                if self.focus == Field::Predict {
                    return FormEvent::Submit;
                }
                self.focus = self.focus.next();
                FormEvent::None
            }
            KeyCode::Left | KeyCode::Char('-') => self.edit(Edit::Down),
            KeyCode::Right | KeyCode::Char('+') => self.edit(Edit::Up),
            KeyCode::Backspace => self.edit(Edit::Pop),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(d) => self.edit(Edit::Push(d)),
                None => FormEvent::None,
            },
            _ => FormEvent::None,
        }
    }

    /// Snapshot of the current values.
    ///
    /// An empty location selector yields an empty neighborhood name.
    pub fn to_input(&self) -> PropertyInput {
        PropertyInput {
            size_in_sqft: self.area.value(),
            bedrooms: self.bedrooms.value() as u8,
            bathrooms: self.bathrooms.value() as u8,
            unit_type: self
                .unit_type
                .selected()
                .copied()
                .unwrap_or(UnitType::Apartment),
            neighborhood: self.location.selected().cloned().unwrap_or_default(),
        }
    }

    fn edit(&mut self, edit: Edit) -> FormEvent {
        let changed = match self.focus {
            Field::Area => edit.apply_number(&mut self.area),
            Field::Bedrooms => edit.apply_number(&mut self.bedrooms),
            Field::Bathrooms => edit.apply_number(&mut self.bathrooms),
            Field::UnitType => edit.apply_choice(&mut self.unit_type),
            Field::Location => edit.apply_choice(&mut self.location),
            Field::Predict => false,
        };

        if changed {
            FormEvent::Changed
        } else {
            FormEvent::None
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Edit {
    Up,
    Down,
    Push(u32),
    Pop,
}

impl Edit {
    fn apply_number(self, field: &mut NumberField) -> bool {
        match self {
            Edit::Up => field.increment(),
            Edit::Down => field.decrement(),
            Edit::Push(d) => field.push_digit(d),
            Edit::Pop => field.pop_digit(),
        }
    }

    fn apply_choice<T>(self, choice: &mut Choice<T>) -> bool {
        match self {
            Edit::Up => choice.next(),
            Edit::Down => choice.prev(),
            Edit::Push(_) | Edit::Pop => false,
        }
    }
}
