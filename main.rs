use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use bresenham_grid::calculator::Point;
use bresenham_grid::config::AppConfig;
use bresenham_grid::drawing::DrawingSession;
use bresenham_grid::graphics::GraphicsRenderer;
use bresenham_grid::grid::{GridError, GridModel};
use bresenham_grid::input::{InputAction, InputHandler};
use bresenham_grid::preview::PreviewController;

#[derive(Debug, Default)]
struct Redraw {
    full: bool,
    present: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::from_env()?;
    let dimensions = config.dimensions()?;
    log::info!(
        "Starting {}x{} grid in a {}x{} window",
        config.columns,
        config.rows,
        config.window_width,
        config.window_height
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    let origin = Point::new(config.origin_x as f64, config.origin_y as f64);
    let mut graphics = GraphicsRenderer::new(&window, origin, config.colors)?;
    let mut session = DrawingSession::new(GridModel::new(dimensions), graphics.calculator(dimensions));
    let mut preview = PreviewController::new();
    let mut input_handler = InputHandler::new();

    let mut redraw = Redraw {
        full: true,
        present: true,
    };

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => {
                let action = match event {
                    WindowEvent::CloseRequested => InputAction::Exit,
                    WindowEvent::Resized(size) => {
                        session.set_calculator(graphics.resize(size.width, size.height, dimensions));
                        redraw.full = true;
                        InputAction::None
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        input_handler.handle_cursor_moved(position.x, position.y)
                    }
                    WindowEvent::CursorLeft { .. } => input_handler.handle_cursor_left(),
                    WindowEvent::MouseInput { state, button, .. } => {
                        input_handler.handle_mouse_input(state, button)
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        input_handler.handle_keyboard_input(&input)
                    }
                    _ => InputAction::None,
                };

                if action == InputAction::Exit {
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                if let Err(err) =
                    apply_action(action, &mut session, &mut preview, &mut graphics, &mut redraw)
                {
                    log::error!("{}", err);
                }
            }
            Event::MainEventsCleared => {
                if redraw.full || redraw.present {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if redraw.full {
                    graphics.render(&session);
                }

                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
                redraw = Redraw::default();
            }
            _ => {}
        }
    });
}

fn apply_action(
    action: InputAction,
    session: &mut DrawingSession,
    preview: &mut PreviewController,
    graphics: &mut GraphicsRenderer,
    redraw: &mut Redraw,
) -> Result<(), GridError> {
    let calculator = *session.calculator();

    match action {
        InputAction::Press(point) => {
            preview.press(calculator.cell_from_point(point), session);
        }
        InputAction::Drag(point) => {
            let cell = calculator.cell_from_point(point);
            graphics.with_painter(calculator, |painter| preview.drag_to(cell, session, painter))?;
            redraw.present = true;
        }
        InputAction::Release(point) => {
            let cell = calculator.cell_from_point(point);
            graphics.with_painter(calculator, |painter| preview.release(cell, session, painter))?;
            redraw.present = true;
        }
        InputAction::Cancel => {
            graphics.with_painter(calculator, |painter| preview.cancel(session, painter))?;
            redraw.present = true;
        }
        InputAction::ClearGrid => {
            if !preview.is_dragging() {
                log::info!("Clearing grid");
                session.clear();
                redraw.full = true;
            }
        }
        InputAction::Exit | InputAction::None => {}
    }

    Ok(())
}
