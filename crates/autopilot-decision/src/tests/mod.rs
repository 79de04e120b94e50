//! Scenario tests for the decision engine.
