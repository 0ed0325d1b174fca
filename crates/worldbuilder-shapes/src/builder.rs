use std::time::{Duration, Instant};

use glam::IVec3;
use worldbuilder_core::constants::TICKS_PER_SECOND;
use worldbuilder_core::settings::BuilderSettings;
use worldbuilder_core::types::{BlockId, Position};
use worldbuilder_world::{Grid, MarkError, Marks, MessageSink};

use crate::boxfill::fill_between_marks;
use crate::cylinder::Cylinder;
use crate::ellipsoid::Ellipsoid;
use crate::error::ShapeError;
use crate::params::{ShapeKind, ShapeParameters, WallAction};
use crate::part::PartSelector;
use crate::pyramid::Pyramid;
use crate::wall::Wall;

/// Outcome of one build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildReport {
    pub kind: ShapeKind,
    /// Cells written, or 0 when the build was rejected.
    pub affected: u64,
    pub elapsed: Duration,
}

impl BuildReport {
    /// Elapsed time in host game ticks, rounded down.
    pub fn ticks(&self) -> u64 {
        (self.elapsed.as_millis() * TICKS_PER_SECOND as u128 / 1000) as u64
    }
}

/// Turns a shape name and its argument tokens into one rasterizer call.
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    settings: BuilderSettings,
}

impl Default for ShapeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeBuilder {
    pub fn new() -> Self {
        Self::with_settings(BuilderSettings::default())
    }

    pub fn with_settings(settings: BuilderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    /// Block used when a build names none.
    pub fn set_default_block(&mut self, block: BlockId) {
        log::debug!("Default block set to {block}");
        self.settings.build_block = block;
    }

    /// Add a mark and show it in the world when marks are visible.
    pub fn mark<G: Grid + ?Sized, S: MessageSink + ?Sized>(
        &self,
        grid: &mut G,
        marks: &mut Marks,
        sink: &mut S,
        pos: Position,
    ) -> Result<usize, MarkError> {
        let index = marks.place(pos).inspect_err(|e| sink.report_error(&e.to_string()))?;
        if self.settings.show_marks && marks.is_visible() {
            grid.place(self.settings.mark_block, pos);
        }
        sink.report(&format!("Mark[{index}] set at ({} {} {})", pos.x, pos.y, pos.z));
        Ok(index)
    }

    /// Remove every mark, clearing any still shown in the world.
    pub fn clear_marks<G: Grid + ?Sized, S: MessageSink + ?Sized>(
        &self,
        grid: &mut G,
        marks: &mut Marks,
        sink: &mut S,
    ) -> usize {
        self.hide_mark_blocks(grid, marks);
        let count = marks.clear();
        sink.report(&format!("{count} marks cleared"));
        count
    }

    /// Clear shown mark blocks that nothing has been built over.
    fn hide_mark_blocks<G: Grid + ?Sized>(&self, grid: &mut G, marks: &Marks) {
        if !(self.settings.show_marks && marks.is_visible()) {
            return;
        }
        for pos in marks.iter() {
            if grid.test_for_block(self.settings.mark_block, *pos) {
                grid.place(BlockId::AIR, *pos);
            }
        }
    }

    /// Collect build parameters from `args`.
    ///
    /// Numbers fill the kind's positional slots. `filled` and `hollow`
    /// set the fill flag. Other words are the part, or the action for walls.
    pub fn parse_parameters(
        &self,
        kind: ShapeKind,
        args: &[&str],
        marks: &Marks,
        origin: Position,
    ) -> Result<ShapeParameters, ShapeError> {
        let mut params = ShapeParameters::new();

        if args.is_empty() {
            if !kind.uses_marks() {
                return Err(ShapeError::MissingDimension(kind));
            }
            if marks.len() < kind.required_marks() {
                return Err(ShapeError::NotEnoughMarks {
                    kind,
                    required: kind.required_marks(),
                    found: marks.len(),
                });
            }
        }

        let mut numbers = Vec::new();
        for token in args {
            if let Ok(n) = token.parse::<i32>() {
                numbers.push(n);
                continue;
            }
            match token.to_ascii_lowercase().as_str() {
                "filled" => params.set_filled(true),
                "hollow" => params.set_filled(false),
                _ => match kind {
                    ShapeKind::Wall => params.set_action(WallAction::parse(token)),
                    ShapeKind::Fill | ShapeKind::Air => {
                        log::debug!("Ignoring '{token}' for {kind}");
                    }
                    _ => params.set_part(PartSelector::parse(token)),
                },
            }
        }

        let slots = match kind {
            ShapeKind::Sphere | ShapeKind::Ellipsoid | ShapeKind::Cylinder => 3,
            ShapeKind::Pyramid | ShapeKind::Wall => 1,
            ShapeKind::Fill => 2,
            ShapeKind::Air => 0,
        };
        if numbers.len() > slots {
            log::debug!("Ignoring extra numbers {:?} for {kind}", &numbers[slots..]);
        }

        match kind {
            ShapeKind::Sphere | ShapeKind::Ellipsoid | ShapeKind::Cylinder => {
                let mut values = numbers.iter().copied();
                if let Some(width) = values.next() {
                    params.set_width(width);
                }
                if let Some(height) = values.next() {
                    params.set_height(height);
                }
                if let Some(length) = values.next() {
                    params.set_length(length);
                }
            }
            ShapeKind::Pyramid => {
                if let Some(&height) = numbers.first() {
                    params.set_height(height);
                }
            }
            ShapeKind::Wall => params.set_height(numbers.first().copied().unwrap_or(1)),
            ShapeKind::Fill => match numbers.first().copied() {
                Some(id) if id > 0 => {
                    let data = numbers.get(1).copied().unwrap_or(0).max(0);
                    params.set_block(BlockId::with_data(id as u32, data as u32));
                }
                Some(id) => log::debug!("Block id {id} not usable, using the default block"),
                None => {}
            },
            ShapeKind::Air => params.set_block(BlockId::AIR),
        }

        if !kind.uses_marks() {
            let center = match (marks.len(), marks.first()) {
                (1, Some(mark)) => mark,
                _ => origin,
            };
            params.set_center(center);
        }

        Ok(params)
    }

    /// Build `kind` from `args`, surfacing rejections as errors.
    pub fn try_build<G: Grid + ?Sized, S: MessageSink + ?Sized>(
        &self,
        grid: &mut G,
        marks: &mut Marks,
        sink: &mut S,
        kind: ShapeKind,
        args: &[&str],
        origin: Position,
    ) -> Result<BuildReport, ShapeError> {
        let started = Instant::now();
        let params = self.parse_parameters(kind, args, marks, origin)?;
        if self.settings.debug {
            sink.report(&format!("{kind}: {params}"));
        }

        let block = params.block_or(self.settings.build_block);
        let affected = match kind {
            ShapeKind::Sphere | ShapeKind::Ellipsoid => {
                self.ellipsoid(kind, &params)?.build(grid, block)
            }
            ShapeKind::Cylinder => self.cylinder(&params)?.build(grid, block),
            ShapeKind::Pyramid => {
                let max_y = grid.bounds().max_y;
                self.pyramid(&params, max_y)?.build(grid, block)
            }
            ShapeKind::Wall => {
                let height = params.height.unwrap_or(1);
                Wall::new(height)
                    .with_action(params.action)
                    .build(grid, marks, block)?
            }
            ShapeKind::Fill | ShapeKind::Air => fill_between_marks(grid, marks, block, kind)?,
        };
        let elapsed = started.elapsed();

        let seconds = elapsed.as_secs_f64();
        let message = match (kind, marks.first(), marks.last()) {
            (ShapeKind::Fill | ShapeKind::Air, Some(from), Some(to)) => format!(
                "Filled ({} {} {}) to ({} {} {}) with {block}: \
                 {affected} blocks {} in {seconds:.2} seconds.",
                from.x,
                from.y,
                from.z,
                to.x,
                to.y,
                to.z,
                kind.verb()
            ),
            _ => format!("{affected} blocks {} in {seconds:.2} seconds.", kind.verb()),
        };
        sink.report(&message);

        if self.settings.auto_clear_marks {
            self.hide_mark_blocks(grid, marks);
            let cleared = marks.clear();
            log::debug!("Auto-cleared {cleared} marks");
        }

        Ok(BuildReport {
            kind,
            affected,
            elapsed,
        })
    }

    /// Build `kind` from `args`. Rejections are reported to `sink` and give
    /// an empty report.
    pub fn build<G: Grid + ?Sized, S: MessageSink + ?Sized>(
        &self,
        grid: &mut G,
        marks: &mut Marks,
        sink: &mut S,
        kind: ShapeKind,
        args: &[&str],
        origin: Position,
    ) -> BuildReport {
        let started = Instant::now();
        match self.try_build(grid, marks, sink, kind, args, origin) {
            Ok(report) => report,
            Err(e) => {
                log::warn!("{kind} build rejected: {e}");
                sink.report_error(&e.to_string());
                BuildReport {
                    kind,
                    affected: 0,
                    elapsed: started.elapsed(),
                }
            }
        }
    }

    /// Run a whitespace-separated command such as `sphere 5 T filled`.
    /// Returns `None` when the shape name is unknown.
    pub fn run_command<G: Grid + ?Sized, S: MessageSink + ?Sized>(
        &self,
        grid: &mut G,
        marks: &mut Marks,
        sink: &mut S,
        command: &str,
        origin: Position,
    ) -> Option<BuildReport> {
        let mut tokens = command.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let kind = match name.parse::<ShapeKind>() {
            Ok(kind) => kind,
            Err(e) => {
                sink.report_error(&e.to_string());
                return None;
            }
        };
        let args: Vec<&str> = tokens.collect();
        Some(self.build(grid, marks, sink, kind, &args, origin))
    }

    fn ellipsoid(
        &self,
        kind: ShapeKind,
        params: &ShapeParameters,
    ) -> Result<Ellipsoid, ShapeError> {
        let width = required_width(kind, params)?;
        let radius = if kind == ShapeKind::Sphere {
            IVec3::splat(width)
        } else {
            IVec3::new(width, params.derived_height(), params.derived_length())
        };
        non_negative("height", radius.y)?;
        non_negative("length", radius.z)?;
        Ok(Ellipsoid {
            center: params.center,
            radius,
            filled: params.filled,
            part: params.part,
        })
    }

    fn cylinder(&self, params: &ShapeParameters) -> Result<Cylinder, ShapeError> {
        let radius_x = required_width(ShapeKind::Cylinder, params)?;
        let radius_z = non_negative("length", params.derived_length())?;
        Ok(Cylinder {
            center: params.center,
            radius_x,
            height: params.derived_height(),
            radius_z,
            filled: params.filled,
            part: params.part,
        })
    }

    /// Both orientations stack `|size|` layers on the center, which must
    /// stay below `max_y` the way wall heights do.
    fn pyramid(&self, params: &ShapeParameters, max_y: i32) -> Result<Pyramid, ShapeError> {
        let size = match params.height {
            Some(size) if size != 0 => size,
            _ => return Err(ShapeError::MissingDimension(ShapeKind::Pyramid)),
        };
        let layers = i64::from(size.unsigned_abs());
        let max = i64::from(max_y) - i64::from(params.center.y);
        if layers > max {
            return Err(ShapeError::HeightExceedsBound {
                height: i32::try_from(layers).unwrap_or(i32::MAX),
                max: i32::try_from(max).unwrap_or(i32::MIN),
            });
        }
        Ok(Pyramid {
            center: params.center,
            size,
            filled: params.filled,
            part: params.part,
        })
    }
}

fn required_width(kind: ShapeKind, params: &ShapeParameters) -> Result<i32, ShapeError> {
    match params.width {
        None | Some(0) => Err(ShapeError::MissingDimension(kind)),
        Some(width) => non_negative("width", width),
    }
}

fn non_negative(name: &'static str, value: i32) -> Result<i32, ShapeError> {
    if value < 0 {
        Err(ShapeError::InvalidDimension { name, value })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use worldbuilder_world::{RecordingSink, VoxelGrid};

    fn origin() -> Position {
        IVec3::new(0, 64, 0)
    }

    fn run(
        builder: &ShapeBuilder,
        marks: &mut Marks,
        kind: ShapeKind,
        args: &[&str],
    ) -> (BuildReport, VoxelGrid, RecordingSink) {
        let mut grid = VoxelGrid::new();
        let mut sink = RecordingSink::new();
        let report = builder.build(&mut grid, marks, &mut sink, kind, args, origin());
        (report, grid, sink)
    }

    #[test]
    fn test_report_ticks() {
        let report = BuildReport {
            kind: ShapeKind::Wall,
            affected: 0,
            elapsed: Duration::from_millis(1_260),
        };
        assert_eq!(report.ticks(), 25);
    }

    #[test]
    fn test_sphere_from_origin() {
        let builder = ShapeBuilder::new();
        let (report, grid, sink) = run(&builder, &mut Marks::new(), ShapeKind::Sphere, &["3"]);
        assert_eq!(report.kind, ShapeKind::Sphere);
        assert_eq!(report.affected, 152);
        assert_eq!(grid.len(), 98);
        assert!(grid.test_for_block(BlockId(2), IVec3::new(0, 67, 0)));
        let last = sink.last_message().unwrap();
        assert!(last.starts_with("152 blocks added in "), "{last}");
        assert!(last.ends_with(" seconds."));
        assert!(sink.errors.is_empty());
    }

    #[test]
    fn test_single_mark_is_center() {
        let builder = ShapeBuilder::new();
        let mark = IVec3::new(10, 20, 30);
        let mut marks = Marks::from_positions([mark]);
        let (_, grid, _) = run(&builder, &mut marks, ShapeKind::Sphere, &["2"]);
        assert!(grid.test_for_block(BlockId(2), mark + IVec3::new(2, 0, 0)));
        assert!(!grid.test_for_block(BlockId(2), origin() + IVec3::new(2, 0, 0)));
    }

    #[test]
    fn test_tokens_set_part_and_fill() {
        let builder = ShapeBuilder::new();
        let args = ["4", "T", "2", "filled", "3"];
        let params = builder
            .parse_parameters(ShapeKind::Ellipsoid, &args, &Marks::new(), origin())
            .unwrap();
        assert_eq!(params.width, Some(4));
        assert_eq!(params.height, Some(2));
        assert_eq!(params.length, Some(3));
        assert_eq!(params.part, PartSelector::parse("T"));
        assert!(params.filled);
        assert_eq!(params.center, origin());
    }

    #[test]
    fn test_ellipsoid_regression_through_builder() {
        let builder = ShapeBuilder::new();
        let args = ["4", "2", "3"];
        let (report, _, _) = run(&builder, &mut Marks::new(), ShapeKind::Ellipsoid, &args);
        assert_eq!(report.affected, 168);
    }

    #[test]
    fn test_missing_size_is_reported() {
        let builder = ShapeBuilder::new();
        for kind in [ShapeKind::Sphere, ShapeKind::Cylinder, ShapeKind::Pyramid] {
            let (report, grid, sink) = run(&builder, &mut Marks::new(), kind, &[]);
            assert_eq!(report.affected, 0);
            assert!(grid.is_empty());
            let expected = format!("Please specify the size of the {kind}. For example: '{kind} 5'");
            assert_eq!(sink.last_error(), Some(expected.as_str()));
        }

        let (report, _, _) = run(&builder, &mut Marks::new(), ShapeKind::Pyramid, &["0"]);
        assert_eq!(report.affected, 0);
    }

    #[test]
    fn test_negative_radius_rejected() {
        let builder = ShapeBuilder::new();
        let mut grid = VoxelGrid::new();
        let result = builder.try_build(
            &mut grid,
            &mut Marks::new(),
            &mut RecordingSink::new(),
            ShapeKind::Sphere,
            &["-3"],
            origin(),
        );
        assert_eq!(
            result,
            Err(ShapeError::InvalidDimension {
                name: "width",
                value: -3
            })
        );
        assert!(grid.is_empty());
    }

    #[test]
    fn test_cylinder_args() {
        let builder = ShapeBuilder::new();
        let (report, grid, _) = run(&builder, &mut Marks::new(), ShapeKind::Cylinder, &["2", "3"]);
        assert_eq!(report.affected, 48);
        assert_eq!(grid.len(), 36);

        let (_, grid, _) = run(&builder, &mut Marks::new(), ShapeKind::Cylinder, &["2", "-5"]);
        assert!(grid.iter().all(|(p, _)| (59..=63).contains(&p.y)));
    }

    #[test]
    fn test_pyramid_first_number_is_height() {
        let builder = ShapeBuilder::new();
        let (report, _, _) = run(&builder, &mut Marks::new(), ShapeKind::Pyramid, &["-4", "9"]);
        assert_eq!(report.affected, 61);
    }

    #[test]
    fn test_wall_without_args_needs_marks() {
        let builder = ShapeBuilder::new();
        let mut marks = Marks::from_positions([IVec3::new(0, 10, 0)]);
        let (report, grid, sink) = run(&builder, &mut marks, ShapeKind::Wall, &[]);
        assert_eq!(report.affected, 0);
        assert!(grid.is_empty());
        assert_eq!(
            sink.last_error(),
            Some("No marks to use: wall needs at least 2 marks, found 1.")
        );
    }

    #[test]
    fn test_wall_defaults_to_one_layer() {
        let builder = ShapeBuilder::new();
        let mut marks = Marks::from_positions([IVec3::new(0, 10, 0), IVec3::new(4, 10, 0)]);
        let (report, grid, sink) = run(&builder, &mut marks, ShapeKind::Wall, &[]);
        assert_eq!(report.affected, 5);
        assert_eq!(grid.len(), 5);
        assert!(sink.last_message().unwrap().starts_with("5 blocks changed in "));
    }

    #[test]
    fn test_wall_actions_share_one_grid() {
        let builder = ShapeBuilder::new();
        let mut grid = VoxelGrid::new();
        let mut sink = RecordingSink::new();
        let mut marks = Marks::from_positions([IVec3::new(0, 10, 0), IVec3::new(0, 10, 3)]);

        let mut wall = |args: &[&str]| {
            builder
                .build(&mut grid, &mut marks, &mut sink, ShapeKind::Wall, args, origin())
                .affected
        };
        assert_eq!(wall(&["5"]), 20);
        assert_eq!(wall(&["3"]), 8);
        assert_eq!(wall(&["1", "add"]), 4);
        assert_eq!(wall(&["9", "destroy"]), 16);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_fill_block_from_args() {
        let builder = ShapeBuilder::new();
        let mut marks = Marks::from_positions([IVec3::new(0, 10, 0), IVec3::new(1, 11, 1)]);
        let (report, grid, sink) = run(&builder, &mut marks, ShapeKind::Fill, &["35", "14"]);
        assert_eq!(report.affected, 8);
        assert_eq!(grid.cells_of(BlockId::with_data(35, 14)).len(), 8);
        let message = sink.last_message().unwrap();
        assert!(message.starts_with("Filled (0 10 0) to (1 11 1) with 35:14: 8 blocks added"));

        // No arguments falls back to the default block
        let (_, grid, _) = run(&builder, &mut marks, ShapeKind::Fill, &[]);
        assert_eq!(grid.cells_of(BlockId(2)).len(), 8);

        let (_, grid, _) = run(&builder, &mut marks, ShapeKind::Fill, &["0", "3"]);
        assert_eq!(grid.cells_of(BlockId(2)).len(), 8);
    }

    #[test]
    fn test_air_clears_marked_box() {
        let builder = ShapeBuilder::new();
        let mut grid = VoxelGrid::new();
        let mut sink = RecordingSink::new();
        let mut marks = Marks::from_positions([IVec3::new(0, 10, 0), IVec3::new(2, 12, 2)]);
        builder.build(&mut grid, &mut marks, &mut sink, ShapeKind::Fill, &[], origin());
        assert_eq!(grid.len(), 27);
        let report =
            builder.build(&mut grid, &mut marks, &mut sink, ShapeKind::Air, &[], origin());
        assert_eq!(report.affected, 27);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_default_block_override() {
        let mut builder = ShapeBuilder::new();
        builder.set_default_block(BlockId(89));
        let (_, grid, _) = run(&builder, &mut Marks::new(), ShapeKind::Sphere, &["1"]);
        assert_eq!(grid.cells_of(BlockId(89)).len(), 18);
    }

    #[test]
    fn test_auto_clear_marks() {
        let builder = ShapeBuilder::with_settings(BuilderSettings {
            auto_clear_marks: true,
            ..BuilderSettings::default()
        });
        let mut marks = Marks::from_positions([IVec3::new(0, 10, 0), IVec3::new(3, 10, 0)]);
        run(&builder, &mut marks, ShapeKind::Wall, &["2"]);
        assert!(marks.is_empty());

        // Rejected builds keep the marks
        let mut marks = Marks::from_positions([IVec3::new(0, 10, 0)]);
        run(&builder, &mut marks, ShapeKind::Wall, &["2"]);
        assert_eq!(marks.len(), 1);
    }

    #[test]
    fn test_auto_clear_removes_shown_mark_blocks() {
        let builder = ShapeBuilder::with_settings(BuilderSettings {
            auto_clear_marks: true,
            ..BuilderSettings::default()
        });
        let mark_block = builder.settings().mark_block;
        let mut grid = VoxelGrid::new();
        let mut sink = RecordingSink::new();
        let mut marks = Marks::new();

        // The center of a hollow sphere is never written over
        let center = IVec3::new(0, 64, 0);
        builder.mark(&mut grid, &mut marks, &mut sink, center).unwrap();
        let report =
            builder.build(&mut grid, &mut marks, &mut sink, ShapeKind::Sphere, &["3"], origin());
        assert_eq!(report.affected, 152);
        assert!(marks.is_empty());
        assert!(!grid.test_for_block(mark_block, center));
        assert!(grid.cells_of(mark_block).is_empty());
        assert_eq!(grid.len(), 98);
    }

    #[test]
    fn test_pyramid_must_fit_below_build_limit() {
        let builder = ShapeBuilder::new();
        let mut grid = VoxelGrid::new();
        let mut sink = RecordingSink::new();
        let mut marks = Marks::new();

        for size in ["-2147483648", "2147483647", "192", "-192"] {
            let result = builder.try_build(
                &mut grid,
                &mut marks,
                &mut sink,
                ShapeKind::Pyramid,
                &[size],
                origin(),
            );
            assert!(
                matches!(result, Err(ShapeError::HeightExceedsBound { max: 191, .. })),
                "size {size}: {result:?}"
            );
        }
        assert!(grid.is_empty());

        let result = builder.try_build(
            &mut grid,
            &mut marks,
            &mut sink,
            ShapeKind::Pyramid,
            &["-191"],
            origin(),
        );
        assert!(result.is_ok());
        assert!(grid.iter().all(|(p, _)| p.y <= 255));
    }

    #[test]
    fn test_cylinder_extreme_heights_are_clamped() {
        let builder = ShapeBuilder::new();
        let layers = |grid: &VoxelGrid| -> BTreeSet<i32> { grid.iter().map(|(p, _)| p.y).collect() };

        let (report, grid, _) =
            run(&builder, &mut Marks::new(), ShapeKind::Cylinder, &["1", "2147483647"]);
        assert!(report.affected > 0);
        assert_eq!(report.affected % 192, 0);
        assert_eq!(layers(&grid), (64..=255).collect());

        let (report, grid, _) =
            run(&builder, &mut Marks::new(), ShapeKind::Cylinder, &["1", "-2147483648"]);
        assert!(report.affected > 0);
        assert_eq!(report.affected % 256, 0);
        assert_eq!(layers(&grid), (0..=255).collect());
    }

    #[test]
    fn test_debug_reports_parameters() {
        let quiet = ShapeBuilder::with_settings(BuilderSettings {
            debug: false,
            ..BuilderSettings::default()
        });
        let (_, _, sink) = run(&quiet, &mut Marks::new(), ShapeKind::Sphere, &["1"]);
        assert_eq!(sink.messages.len(), 1);

        let (_, _, sink) = run(&ShapeBuilder::new(), &mut Marks::new(), ShapeKind::Sphere, &["1"]);
        assert_eq!(sink.messages.len(), 2);
        assert!(sink.messages[0].starts_with("sphere: center (0 64 0), width 1"));
    }

    #[test]
    fn test_run_command() {
        let builder = ShapeBuilder::new();
        let mut grid = VoxelGrid::new();
        let mut sink = RecordingSink::new();
        let mut marks = Marks::new();

        let report = builder
            .run_command(&mut grid, &mut marks, &mut sink, "cyl 2 3 hollow", origin())
            .unwrap();
        assert_eq!(report.kind, ShapeKind::Cylinder);
        assert_eq!(report.affected, 48);

        assert!(builder
            .run_command(&mut grid, &mut marks, &mut sink, "cube 3", origin())
            .is_none());
        assert_eq!(sink.last_error(), Some("Unknown shape 'cube'"));
    }

    #[test]
    fn test_marks_shown_and_cleared() {
        let builder = ShapeBuilder::new();
        let mut grid = VoxelGrid::new();
        let mut sink = RecordingSink::new();
        let mut marks = Marks::new();
        let mark_block = builder.settings().mark_block;

        let pos = IVec3::new(3, 70, 3);
        assert_eq!(builder.mark(&mut grid, &mut marks, &mut sink, pos), Ok(0));
        assert!(grid.test_for_block(mark_block, pos));
        assert_eq!(sink.last_message(), Some("Mark[0] set at (3 70 3)"));
        assert_eq!(
            builder.mark(&mut grid, &mut marks, &mut sink, pos),
            Err(MarkError::AlreadyMarked(pos))
        );

        // A built block over a mark survives clearing
        let other = IVec3::new(4, 70, 3);
        builder.mark(&mut grid, &mut marks, &mut sink, other).unwrap();
        grid.place(BlockId(2), other);

        assert_eq!(builder.clear_marks(&mut grid, &mut marks, &mut sink), 2);
        assert!(marks.is_empty());
        assert_eq!(grid.len(), 1);
        assert!(grid.test_for_block(BlockId(2), other));
    }
}
