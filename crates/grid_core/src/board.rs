use std::fmt;
use std::sync::Arc;

use crate::error::GameError;
use crate::game::{BoardView, GameState};
use crate::layout::Layout;
use crate::rules;
use crate::types::*;

/// A position in the grid chase game.
///
/// Static walls are shared between successors; food, capsules, agents and
/// score are copied on every transition.
#[derive(Clone, Debug)]
pub struct GridState {
    pub(crate) layout: Arc<Layout>,
    pub(crate) food: Vec<bool>,
    pub(crate) food_left: usize,
    pub(crate) capsules: Vec<Pos>,
    pub(crate) agents: Vec<AgentState>,
    pub(crate) score: i64,
    pub(crate) win: bool,
    pub(crate) lose: bool,
}

impl GridState {
    pub fn new(layout: Layout) -> Self {
        let food = layout.initial_food().to_vec();
        let food_left = food.iter().filter(|&&f| f).count();
        let capsules = layout.capsules().to_vec();
        let agents = std::iter::once(layout.controlled_start())
            .chain(layout.adversary_starts().iter().copied())
            .map(AgentState::new)
            .collect();

        Self {
            layout: Arc::new(layout),
            food,
            food_left,
            capsules,
            agents,
            score: 0,
            win: false,
            lose: false,
        }
    }

    pub fn from_layout_str(text: &str) -> Result<Self, GameError> {
        Ok(Self::new(Layout::parse(text)?))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn agent(&self, index: AgentIndex) -> Option<&AgentState> {
        self.agents.get(index)
    }

    pub fn agents(&self) -> &[AgentState] {
        &self.agents
    }

    pub fn has_food(&self, pos: Pos) -> bool {
        self.layout.index(pos).is_some_and(|i| self.food[i])
    }

    pub fn food_count(&self) -> usize {
        self.food_left
    }

    pub fn capsules(&self) -> &[Pos] {
        &self.capsules
    }

    pub fn raw_score(&self) -> i64 {
        self.score
    }

    /// Renders the board in layout notation. Scared adversaries show as `S`.
    pub fn render(&self) -> String {
        let (w, h) = (self.layout.width(), self.layout.height());
        let mut rows = Vec::with_capacity(h);
        for y in 0..h {
            let mut row = String::with_capacity(w);
            for x in 0..w {
                let pos = Pos::new(x as i32, y as i32);
                let ch = if let Some(i) = self.agents.iter().position(|a| a.position == pos) {
                    match i {
                        CONTROLLED => 'P',
                        _ if self.agents[i].is_scared() => 'S',
                        _ => 'G',
                    }
                } else if self.layout.is_wall(pos) {
                    '%'
                } else if self.has_food(pos) {
                    '.'
                } else if self.capsules.contains(&pos) {
                    'o'
                } else {
                    ' '
                };
                row.push(ch);
            }
            rows.push(row);
        }
        rows.join("\n")
    }

    pub(crate) fn check_agent(&self, agent: AgentIndex) -> Result<(), GameError> {
        if agent < self.agents.len() {
            Ok(())
        } else {
            Err(GameError::InvalidAgent {
                agent,
                num_agents: self.agents.len(),
            })
        }
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.render())?;
        write!(f, "Score: {}", self.score)
    }
}

impl GameState for GridState {
    type Action = Direction;

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        rules::legal_actions(self, agent)
    }

    fn successor(&self, agent: AgentIndex, action: Direction) -> Result<Self, GameError> {
        rules::apply(self, agent, action)
    }

    fn is_win(&self) -> bool {
        self.win
    }

    fn is_lose(&self) -> bool {
        self.lose
    }

    fn num_agents(&self) -> usize {
        self.agents.len()
    }

    fn score(&self) -> f64 {
        self.score as f64
    }
}

impl BoardView for GridState {
    fn controlled_position(&self) -> Pos {
        self.agents[CONTROLLED].position
    }

    fn adversaries(&self) -> Vec<AdversaryView> {
        self.agents[1..]
            .iter()
            .map(|a| AdversaryView {
                position: a.position,
                scared_timer: a.scared_timer,
            })
            .collect()
    }

    fn food_positions(&self) -> Vec<Pos> {
        let w = self.layout.width();
        self.food
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f)
            .map(|(i, _)| Pos::new((i % w) as i32, (i / w) as i32))
            .collect()
    }
}
