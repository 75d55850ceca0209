//! Tick-by-tick chase between an evading agent and a pursuer.

use std::fmt;

use evade_grid::{GridLookup, GridMap, Markers, Point};
use evade_paths::{DistanceField, Entropy, Location, MoveError, MoveSelector, NeighborLookup};
use log::{debug, info};

use crate::config::ScenarioConfig;

/// How a chase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The agent reached the destination.
    Escaped { ticks: u32 },
    /// The pursuer reached the agent.
    Caught { ticks: u32 },
    /// The agent had nowhere to go.
    Stuck { ticks: u32 },
    /// Neither side won before the tick limit.
    TimedOut { ticks: u32 },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escaped { ticks } => write!(f, "agent escaped after {ticks} ticks"),
            Self::Caught { ticks } => write!(f, "agent caught after {ticks} ticks"),
            Self::Stuck { ticks } => write!(f, "agent stuck after {ticks} ticks"),
            Self::TimedOut { ticks } => write!(f, "no result after {ticks} ticks"),
        }
    }
}

/// One hop for `hunter` along a shortest path to `prey`.
///
/// Ties go to the first neighbor the lookup reports. A hunter with no route
/// to its prey stays where it is.
pub fn pursue<L, N>(hunter: L, prey: L, lookup: &N) -> L
where
    L: Location,
    N: NeighborLookup<L> + ?Sized,
{
    let field = DistanceField::compute_unbounded(prey, lookup);
    let mut nbuf = Vec::with_capacity(8);
    lookup.neighbors(hunter, &mut nbuf);

    let mut best: Option<(i32, L)> = None;
    for np in nbuf {
        let Some(d) = field.distance(np) else {
            continue;
        };
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, np));
        }
    }
    best.map_or(hunter, |(_, np)| np)
}

/// A running chase on a grid map.
pub struct Chase<'a> {
    selector: MoveSelector<Point, GridLookup<'a>>,
    agent: Point,
    adversary: Point,
    max_search_depth: i32,
    max_ticks: u32,
    tick: u32,
}

impl<'a> Chase<'a> {
    pub fn new(map: &'a GridMap, markers: Markers, cfg: &ScenarioConfig) -> Self {
        let lookup = map.lookup(cfg.adjacency);
        Self {
            selector: MoveSelector::with_config(markers.destination, lookup, cfg.selector),
            agent: markers.agent,
            adversary: markers.adversary,
            max_search_depth: cfg.max_search_depth,
            max_ticks: cfg.max_ticks,
            tick: 0,
        }
    }

    #[inline]
    pub fn agent(&self) -> Point {
        self.agent
    }

    #[inline]
    pub fn adversary(&self) -> Point {
        self.adversary
    }

    #[inline]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Advance one tick: the agent moves, then the pursuer.
    ///
    /// Returns the outcome once the chase is over.
    pub fn step<E>(&mut self, entropy: &mut E) -> Result<Option<Outcome>, MoveError<Point>>
    where
        E: Entropy + ?Sized,
    {
        if self.tick >= self.max_ticks {
            return Ok(Some(Outcome::TimedOut { ticks: self.tick }));
        }
        self.tick += 1;
        let ticks = self.tick;

        let next = match self.selector.next_move(
            self.agent,
            self.adversary,
            self.max_search_depth,
            entropy,
        ) {
            Ok(p) => p,
            Err(MoveError::NoLegalMoves { .. }) => return Ok(Some(Outcome::Stuck { ticks })),
            Err(e) => return Err(e),
        };
        debug!("tick {ticks}: agent {} -> {next}", self.agent);
        self.agent = next;

        if self.agent == self.selector.destination() {
            return Ok(Some(Outcome::Escaped { ticks }));
        }
        if self.agent == self.adversary {
            return Ok(Some(Outcome::Caught { ticks }));
        }

        let hunt = pursue(self.adversary, self.agent, self.selector.lookup());
        debug!("tick {ticks}: adversary {} -> {hunt}", self.adversary);
        self.adversary = hunt;
        if self.adversary == self.agent {
            return Ok(Some(Outcome::Caught { ticks }));
        }
        Ok(None)
    }

    /// Step until the chase ends, calling `on_tick` after every tick.
    pub fn run<E>(
        &mut self,
        entropy: &mut E,
        mut on_tick: impl FnMut(&Self),
    ) -> Result<Outcome, MoveError<Point>>
    where
        E: Entropy + ?Sized,
    {
        loop {
            if let Some(outcome) = self.step(entropy)? {
                on_tick(self);
                info!("chase over: {outcome:?}");
                return Ok(outcome);
            }
            on_tick(self);
        }
    }

    /// The map with the destination, agent and pursuer drawn on it.
    pub fn render(&self) -> String {
        self.selector.lookup().map().render(&[
            (self.selector.destination(), '>'),
            (self.agent, '@'),
            (self.adversary, 'E'),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evade_grid::Adjacency;
    use evade_paths::{NoMovePolicy, SelectorConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scenario(map: &str) -> ScenarioConfig {
        ScenarioConfig {
            map: map.to_string(),
            ..ScenarioConfig::default()
        }
    }

    #[test]
    fn pursue_takes_shortest_hop() {
        let path = |n: u32| [n.checked_sub(1), (n < 9).then_some(n + 1)].into_iter().flatten();
        assert_eq!(pursue(7, 2, &path), 6);
        assert_eq!(pursue(2, 7, &path), 3);
        assert_eq!(pursue(4, 4, &path), 3);
    }

    #[test]
    fn pursue_without_route_stays() {
        let none = |_: u32| Vec::<u32>::new();
        assert_eq!(pursue(3, 8, &none), 3);
    }

    #[test]
    fn agent_outruns_trailing_pursuer() {
        let cfg = scenario("#########\n#E@....>#\n#########");
        let map = GridMap::parse(&cfg.map).unwrap();
        let mk = Markers::find(&cfg.map).unwrap();
        let mut chase = Chase::new(&map, mk, &cfg);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ticks = vec![];
        let outcome = chase.run(&mut rng, |c| ticks.push(c.tick())).unwrap();
        assert_eq!(outcome, Outcome::Escaped { ticks: 5 });
        assert_eq!(ticks, vec![1, 2, 3, 4, 5]);
        assert_eq!(chase.agent(), mk.destination);
    }

    #[test]
    fn cornered_agent_gets_caught() {
        // Dead end: the pursuer blocks the only way out.
        let cfg = scenario("######\n#@E.>#\n######");
        let map = GridMap::parse(&cfg.map).unwrap();
        let mk = Markers::find(&cfg.map).unwrap();
        let mut chase = Chase::new(&map, mk, &cfg);
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(chase.step(&mut rng), Ok(Some(Outcome::Caught { ticks: 1 })));
    }

    #[test]
    fn walled_in_agent_is_stuck_or_stays() {
        let map_text = "#####\n#@#>#\n###.#\n#E..#\n#####";
        let cfg = scenario(map_text);
        let map = GridMap::parse(map_text).unwrap();
        let mk = Markers::find(map_text).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        let mut chase = Chase::new(&map, mk, &cfg);
        assert_eq!(chase.step(&mut rng), Ok(Some(Outcome::Stuck { ticks: 1 })));

        let staying = ScenarioConfig {
            selector: SelectorConfig::default().on_no_moves(NoMovePolicy::Stay),
            max_ticks: 3,
            ..cfg
        };
        let mut chase = Chase::new(&map, mk, &staying);
        let outcome = chase.run(&mut rng, |_| {}).unwrap();
        assert_eq!(outcome, Outcome::TimedOut { ticks: 3 });
        assert_eq!(chase.agent(), mk.agent);
    }

    #[test]
    fn render_overlays_positions() {
        let cfg = ScenarioConfig {
            adjacency: Adjacency::Eight,
            ..scenario("#####\n#@E>#\n#####")
        };
        let map = GridMap::parse(&cfg.map).unwrap();
        let mk = Markers::find(&cfg.map).unwrap();
        let chase = Chase::new(&map, mk, &cfg);
        assert_eq!(chase.render(), "#####\n#@E>#\n#####");
    }

    #[test]
    fn outcome_display() {
        assert_eq!(
            Outcome::Caught { ticks: 12 }.to_string(),
            "agent caught after 12 ticks"
        );
    }
}
