// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable walkthroughs of the Armature widget kernels.
//!
//! Each example drives a stage from a scripted interaction sequence and
//! prints the resulting events and attribute sets, standing in for the
//! element tree a real host would mutate.
