//! The NodeMCU ESP8266 + RA-02 LoRa + BME280 gateway.
//!
//! Every coordinate is a hand-placed constant in drawing units. U1 sits on
//! the left; U2 (BME280, I2C) and U3 (RA-02, SPI) are stacked on the right
//! and every wire runs from the U1 right edge to just short of U2 or U3.

use log::debug;

use wiring_core::geometry::{Point, Size};

use crate::canvas::{
    Anchor, Canvas, LabelDescriptor, LineDescriptor, LinePlacement, Net, ShapeDescriptor,
};

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "gateway_diagram.png";

pub const TITLE: &str = "Gateway: NodeMCU ESP8266 + RA-02 (433MHz) + BME280 (I2C)";
const TITLE_FONT_SIZE: u16 = 14;

const PIN_FONT_SIZE: u16 = 10;

const NODE: Point = Point::new(-4.5, 0.0);
const NODE_SIZE: Size = Size::new(3.6, 4.2);
const NODE_PINS: [&str; 11] = [
    "- 3V3",
    "- GND",
    "- D1\n(GPIO5)",
    "- D2\n(GPIO4)",
    "- D3\n(GPIO0)",
    "- D4\n(GPIO2)",
    "- D5\n(GPIO14)",
    "- D6\n(GPIO12)",
    "- D7\n(GPIO13)",
    "- D8\n(GPIO15)",
    "- USB_VBUS",
];
/// U1 pin column offsets from the U1 center.
const NODE_PIN_X: f32 = -1.65;
const NODE_PIN_TOP: f32 = 1.55;
const NODE_PIN_PITCH: f32 = 0.35;

const BME: Point = Point::new(1.5, 1.2);
const BME_SIZE: Size = Size::new(2.0, 1.8);
const BME_PINS: [&str; 4] = [
    "- VCC (3.3V)",
    "- GND",
    "- SCL -> D1 (GPIO5)",
    "- SDA -> D3 (GPIO0)",
];
const BME_PIN_PITCH: f32 = 0.3;

const LORA: Point = Point::new(1.5, -1.6);
const LORA_SIZE: Size = Size::new(2.0, 2.8);
const LORA_PINS: [&str; 9] = [
    "- VCC (3.3V)",
    "- GND",
    "- MISO -> D6 (GPIO12)",
    "- MOSI -> D7 (GPIO13)",
    "- SCK  -> D5 (GPIO14)",
    "- NSS  -> D8 (GPIO15)",
    "- RST  -> D4 (GPIO2)",
    "- DIO0 -> D2 (GPIO4)",
    "- ANT  -> Antenna",
];
const LORA_PIN_PITCH: f32 = 0.25;

/// Inset of the U2/U3 pin labels from the box's left edge.
const PIN_INSET: f32 = 0.1;

/// Horizontal gap between a wire end and the U2/U3 box.
const WIRE_GAP: f32 = 0.2;

/// Builds the gateway canvas.
///
/// Elements are pushed in drawing order: title, U1 and its pins, U2 and its
/// pins, U3 and its pins, the wires, then the antenna stub.
pub fn canvas() -> Canvas {
    let mut canvas = Canvas::new().with_title(TITLE, TITLE_FONT_SIZE);

    canvas.push(ShapeDescriptor::new(NODE, NODE_SIZE, "U1\nNodeMCU ESP8266"));
    pin_column(
        &mut canvas,
        Point::new(NODE.x() + NODE_PIN_X, NODE.y() + NODE_PIN_TOP),
        NODE_PIN_PITCH,
        &NODE_PINS,
    );

    canvas.push(
        ShapeDescriptor::new(BME, BME_SIZE, "U2\nBME280 (I2C)").with_anchor(Anchor::TopLeft),
    );
    pin_column(
        &mut canvas,
        Point::new(BME.x() + PIN_INSET, BME.y() - BME_PIN_PITCH),
        BME_PIN_PITCH,
        &BME_PINS,
    );

    canvas.push(
        ShapeDescriptor::new(LORA, LORA_SIZE, "U3\nRA02 LoRa").with_anchor(Anchor::TopLeft),
    );
    pin_column(
        &mut canvas,
        Point::new(LORA.x() + PIN_INSET, LORA.y() - 0.3),
        LORA_PIN_PITCH,
        &LORA_PINS,
    );

    for line in wires() {
        canvas.push(line);
    }

    canvas.push(
        LineDescriptor::new(
            Point::new(LORA.x() + 1.6, LORA.y() - 1.6),
            Point::new(LORA.x() + 2.2, LORA.y() - 1.6),
            Net::Rf,
        )
        .with_label("Antenna")
        .with_label_placement(LinePlacement::End),
    );

    debug!(
        shapes = canvas.shapes().count(),
        labels = canvas.labels().count(),
        lines = canvas.lines().count();
        "Gateway canvas built"
    );
    canvas
}

/// Pushes one label per pin, top to bottom, starting at `top`.
fn pin_column(canvas: &mut Canvas, top: Point, pitch: f32, pins: &[&'static str]) {
    for (row, &pin) in pins.iter().enumerate() {
        let position = Point::new(top.x(), top.y() - pitch * row as f32);
        canvas.push(LabelDescriptor::new(position, pin, PIN_FONT_SIZE));
    }
}

/// The twelve wires from U1 to U2 and U3.
fn wires() -> Vec<LineDescriptor> {
    let from = |dy: f32| Point::new(NODE.x() + NODE_SIZE.width() / 2.0, NODE.y() + dy);
    let to_bme = |dy: f32| Point::new(BME.x() - WIRE_GAP, BME.y() + dy);
    let to_lora = |dy: f32| Point::new(LORA.x() - WIRE_GAP, LORA.y() + dy);

    let top = |start: Point, end: Point, net: Net, label: &'static str| {
        LineDescriptor::new(start, end, net)
            .with_label(label)
            .with_label_placement(LinePlacement::Top)
    };
    let middle = |start: Point, end: Point, net: Net, label: &'static str| {
        LineDescriptor::new(start, end, net)
            .with_label(label)
            .with_label_placement(LinePlacement::Middle)
    };

    vec![
        top(from(0.9), to_bme(-0.25), Net::Power, "3.3V"),
        top(from(0.6), to_lora(0.45), Net::Power, "3.3V"),
        top(from(0.4), to_bme(-0.55), Net::Ground, "GND"),
        top(from(0.1), to_lora(0.15), Net::Ground, "GND"),
        top(from(1.15), to_bme(0.05), Net::I2c, "SCL -> D1"),
        top(from(0.75), to_bme(-0.15), Net::I2c, "SDA -> D3"),
        middle(from(-0.25), to_lora(0.05), Net::Spi, "MISO -> D6"),
        middle(from(-0.55), to_lora(-0.25), Net::Spi, "MOSI -> D7"),
        middle(from(-0.85), to_lora(-0.55), Net::Spi, "SCK -> D5"),
        middle(from(-1.15), to_lora(-0.85), Net::Spi, "NSS -> D8"),
        middle(from(-1.45), to_lora(-1.15), Net::Control, "RST -> D4"),
        middle(from(-1.75), to_lora(-1.45), Net::Control, "DIO0 -> D2"),
    ]
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::canvas::Element;

    #[test]
    fn test_gateway_element_counts() {
        let canvas = canvas();
        assert_eq!(canvas.shapes().count(), 3);
        assert_eq!(canvas.labels().count(), 24);
        assert_eq!(canvas.lines().count(), 13);
        assert_eq!(canvas.len(), 40);
        assert_eq!(canvas.title(), Some((TITLE, 14)));
    }

    #[test]
    fn test_gateway_drawing_order() {
        let canvas = canvas();
        let elements = canvas.elements();

        let Element::Shape(first) = &elements[0] else {
            panic!("first element should be U1");
        };
        assert!(first.label().starts_with("U1"));

        // U1 pins follow U1 directly.
        let Element::Label(first_pin) = &elements[1] else {
            panic!("U1 pins should follow U1");
        };
        assert_eq!(first_pin.text(), "- 3V3");

        let Element::Shape(bme) = &elements[12] else {
            panic!("U2 should follow the 11 U1 pins");
        };
        assert!(bme.label().starts_with("U2"));

        let Element::Shape(lora) = &elements[17] else {
            panic!("U3 should follow the 4 U2 pins");
        };
        assert!(lora.label().starts_with("U3"));

        let Some(Element::Line(antenna)) = elements.last() else {
            panic!("the antenna stub should be drawn last");
        };
        assert_eq!(antenna.label(), Some("Antenna"));
        assert_eq!(antenna.net(), Net::Rf);
        assert_eq!(antenna.label_placement(), LinePlacement::End);
    }

    #[test]
    fn test_gateway_wires_start_at_node_right_edge() {
        let canvas = canvas();
        for line in canvas.lines().filter(|line| line.net() != Net::Rf) {
            assert_approx_eq!(f32, line.start().x(), -2.7, epsilon = 1e-5);
            assert_approx_eq!(f32, line.end().x(), 1.3, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_gateway_pins_inside_their_boxes() {
        let canvas = canvas();
        let boxes: Vec<_> = canvas.shapes().map(|shape| shape.bounds()).collect();

        for label in canvas.labels() {
            let p = label.position();
            assert!(
                boxes.iter().any(|b| p.x() >= b.min_x()
                    && p.x() <= b.max_x()
                    && p.y() >= b.min_y()
                    && p.y() <= b.max_y()),
                "{} at ({}, {}) is outside every box",
                label.text(),
                p.x(),
                p.y()
            );
        }
    }

    #[test]
    fn test_gateway_node_gpio_pins_span_two_lines() {
        let canvas = canvas();
        let node: Vec<_> = canvas.labels().take(11).collect();

        assert_eq!(node[0].text(), "- 3V3");
        assert_eq!(node[2].text(), "- D1\n(GPIO5)");
        assert_eq!(node[10].text(), "- USB_VBUS");
        for pin in &node[2..10] {
            assert_eq!(pin.text().lines().count(), 2, "{}", pin.text());
        }
    }

    #[test]
    fn test_gateway_lora_pins() {
        let canvas = canvas();
        let lora: Vec<_> = canvas.labels().skip(15).collect();
        assert_eq!(lora.len(), 9);
        assert_eq!(lora[0].text(), "- VCC (3.3V)");
        assert_approx_eq!(f32, lora[0].position().y(), -1.9, epsilon = 1e-5);
        assert_eq!(lora[8].text(), "- ANT  -> Antenna");
        assert_approx_eq!(f32, lora[8].position().y(), -3.9, epsilon = 1e-5);
    }

    #[test]
    fn test_gateway_top_labels_sit_just_above_their_wire() {
        let label_size = Size::new(0.6, 0.15);
        let canvas = canvas();
        let top_lines: Vec<_> = canvas
            .lines()
            .filter(|line| line.label_placement() == LinePlacement::Top)
            .collect();
        assert_eq!(top_lines.len(), 6);

        for line in top_lines {
            let mid = line.start().midpoint(line.end());
            let offset = line.label_center(label_size).y() - mid.y();
            assert!(
                offset > 0.0 && offset < 0.25,
                "{:?} label is {offset} above its midpoint",
                line.label()
            );
        }
    }

    #[test]
    fn test_gateway_antenna_stub() {
        let canvas = canvas();
        let antenna = canvas.lines().last().unwrap();
        assert_approx_eq!(f32, antenna.start().x(), 3.1, epsilon = 1e-5);
        assert_approx_eq!(f32, antenna.end().x(), 3.7, epsilon = 1e-5);
        assert_approx_eq!(f32, antenna.start().y(), -3.2, epsilon = 1e-5);
        assert_approx_eq!(f32, antenna.end().y(), -3.2, epsilon = 1e-5);
    }
}
