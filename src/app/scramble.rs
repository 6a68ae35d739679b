use rand::Rng;

pub const FILLER_GLYPHS: [char; 17] = [
    '!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '=', '+', '*', '^', '?', '#',
];

const START_TICK_WINDOW: u32 = 80;
const REVEAL_TICK_WINDOW: u32 = 80;
const FLICKER_PROBABILITY: f64 = 0.28;

#[derive(Clone, Debug)]
struct QueueEntry {
    from: Option<char>,
    to: Option<char>,
    start: u32,
    end: u32,
    glyph: Option<char>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrambleDone {
    pub generation: u64,
}

#[derive(Clone, Debug)]
pub struct ScrambleText {
    text: String,
    target: String,
    queue: Vec<QueueEntry>,
    frame: u32,
    generation: u64,
    running: bool,
}

impl ScrambleText {
    pub fn new(initial: impl Into<String>) -> Self {
        let text = initial.into();
        Self {
            target: text.clone(),
            text,
            queue: Vec::new(),
            frame: 0,
            generation: 0,
            running: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts a transition from whatever is on screen now. A transition still
    /// in flight is dropped and will never report completion.
    pub fn set_text<R: Rng + ?Sized>(&mut self, target: impl Into<String>, rng: &mut R) -> u64 {
        let target = target.into();
        let old = self.text.chars().collect::<Vec<_>>();
        let new = target.chars().collect::<Vec<_>>();
        let length = old.len().max(new.len());

        self.queue.clear();
        self.queue.reserve(length);
        for index in 0..length {
            let start = rng.random_range(0..START_TICK_WINDOW);
            let end = start + rng.random_range(0..REVEAL_TICK_WINDOW);
            self.queue.push(QueueEntry {
                from: old.get(index).copied(),
                to: new.get(index).copied(),
                start,
                end,
                glyph: None,
            });
        }

        self.target = target;
        self.frame = 0;
        self.generation += 1;
        self.running = true;
        self.generation
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ScrambleDone> {
        if !self.running {
            return None;
        }

        let mut output = String::with_capacity(self.target.len().max(self.text.len()));
        let mut complete = 0usize;

        for entry in &mut self.queue {
            if self.frame >= entry.end {
                complete += 1;
                output.extend(entry.to);
            } else if self.frame >= entry.start {
                if entry.glyph.is_none() || rng.random_bool(FLICKER_PROBABILITY) {
                    entry.glyph = Some(random_glyph(rng));
                }
                output.extend(entry.glyph);
            } else {
                output.extend(entry.from);
            }
        }

        self.text = output;
        self.frame += 1;

        if complete == self.queue.len() {
            self.running = false;
            self.queue.clear();
            return Some(ScrambleDone {
                generation: self.generation,
            });
        }

        None
    }
}

fn random_glyph<R: Rng + ?Sized>(rng: &mut R) -> char {
    FILLER_GLYPHS[rng.random_range(0..FILLER_GLYPHS.len())]
}
