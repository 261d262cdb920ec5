// SdnSim: Simulating a Software-Defined Network Controller
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Traffic classes
//!
//! Every injected flow carries a free-form label. The label is mapped onto one of three traffic
//! classes, which determine both the path selection policy and the color in the visualization.

use std::fmt;

/// Traffic class, derived from the label of an injected flow. The discriminant is the priority
/// rank: a higher rank means more critical traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrafficClass {
    /// Best-effort traffic, also used for every unknown label
    Default = 1,
    /// Important traffic
    Important = 2,
    /// Critical traffic, always routed along the path with the smallest total weight
    Critical = 3,
}

impl Default for TrafficClass {
    fn default() -> Self {
        Self::Default
    }
}

impl TrafficClass {
    /// Derive the class from a traffic label. The comparison ignores the case, and every label
    /// that is not known maps to [`TrafficClass::Default`].
    pub fn from_label(label: impl AsRef<str>) -> Self {
        match label.as_ref().to_lowercase().as_str() {
            "critical" => Self::Critical,
            "important" => Self::Important,
            _ => Self::Default,
        }
    }

    /// Priority rank of the class
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    /// Color used to highlight paths of this class
    pub fn color(&self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::Important => "orange",
            Self::Default => "green",
        }
    }
}

impl fmt::Display for TrafficClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Important => write!(f, "important"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Traffic descriptor of a (source, destination) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficDescriptor {
    /// Label as it was given when injecting the flow
    pub label: String,
    /// Class derived from the label
    pub class: TrafficClass,
}

impl TrafficDescriptor {
    /// Create a new descriptor, deriving the class from the label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let class = TrafficClass::from_label(&label);
        Self { label, class }
    }

    /// Priority rank of the traffic
    pub fn priority(&self) -> u8 {
        self.class.priority()
    }
}

impl Default for TrafficDescriptor {
    fn default() -> Self {
        Self { label: String::from("default"), class: TrafficClass::Default }
    }
}
